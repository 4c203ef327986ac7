use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::catalog::ConstellationId;
use crate::chart::plane_to_world;
use crate::config::ChartConfig;
use crate::schedule::ChartSet;
use crate::state::ViewState;

pub struct DotsPlugin;

impl Plugin for DotsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_star_dots.run_if(resource_exists::<Catalog>))
            .add_systems(
                Update,
                (
                    layout_star_dots.in_set(ChartSet::ViewUpdates),
                    update_dot_material.run_if(resource_exists::<StarDotAssets>),
                ),
            );
    }
}

/// One rendered star dot. `plane_position` is the untransformed overview
/// spot; detail positions derive from it through the cached fit.
#[derive(Component, Debug, Reflect)]
pub struct StarDot {
    pub constellation:  ConstellationId,
    pub plane_position: Vec2,
}

/// Handle shared by every dot, kept so config changes restyle all of them
/// at once.
#[derive(Resource, Debug)]
struct StarDotAssets {
    material: Handle<ColorMaterial>,
}

fn spawn_star_dots(
    mut commands: Commands,
    catalog: Res<Catalog>,
    config: Res<ChartConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // one unit circle mesh and one material for all dots; the radius comes
    // in through each dot's transform scale
    let mesh = meshes.add(Circle::new(1.0));
    let material = materials.add(ColorMaterial::from(config.star_color));

    let mut count = 0;
    for (id, constellation) in catalog.iter() {
        for star in &constellation.stars {
            commands.spawn((
                Name::new(star.name),
                StarDot {
                    constellation:  id,
                    plane_position: star.position,
                },
                Mesh2d(mesh.clone()),
                MeshMaterial2d(material.clone()),
                Transform::from_translation(plane_to_world(star.position).extend(0.0))
                    .with_scale(Vec3::splat(config.star_radius)),
            ));
            count += 1;
        }
    }

    debug!("spawned {count} star dots");
    commands.insert_resource(StarDotAssets { material });
}

/// Puts every dot where the current view says it belongs. Overview shows
/// all dots at their plane positions; detail shows only the selected
/// constellation, run through its cached fit. The transform scale carries
/// the configured dot radius and never the fit scale, so dots keep a
/// constant screen size in both views.
fn layout_star_dots(
    view: Res<ViewState>,
    config: Res<ChartConfig>,
    mut dots: Query<(&StarDot, &mut Transform, &mut Visibility)>,
) {
    for (dot, mut transform, mut visibility) in &mut dots {
        transform.scale = Vec3::splat(config.star_radius);
        match *view {
            ViewState::Overview => {
                transform.translation = plane_to_world(dot.plane_position).extend(0.0);
                *visibility = Visibility::Visible;
            },
            ViewState::Detail { selected, fit } => {
                if dot.constellation == selected {
                    transform.translation =
                        plane_to_world(fit.apply(dot.plane_position)).extend(0.0);
                    *visibility = Visibility::Visible;
                } else {
                    *visibility = Visibility::Hidden;
                }
            },
        }
    }
}

fn update_dot_material(
    config: Res<ChartConfig>,
    assets: Res<StarDotAssets>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !config.is_changed() {
        return;
    }
    if let Some(material) = materials.get_mut(&assets.material) {
        material.color = config.star_color;
    }
}
