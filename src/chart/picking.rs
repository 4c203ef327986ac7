use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::catalog::Catalog;
use crate::catalog::Constellation;
use crate::catalog::ConstellationId;
use crate::chart::fit::Fit;
use crate::config::ChartConfig;
use crate::schedule::ChartSet;
use crate::state::ViewMode;
use crate::state::ViewState;

/// Hit-test radius around a star, in plane-units.
pub const PICK_RADIUS: f32 = 10.0;

/// Constellations currently under the pointer. Rebuilt every frame in
/// overview and empty in detail.
#[derive(Resource, Debug, Default)]
pub struct Hovered(pub Vec<ConstellationId>);

pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Hovered>().add_systems(
            Update,
            (
                update_hover,
                select_under_pointer
                    .run_if(in_state(ViewMode::Overview))
                    .run_if(input_just_pressed(MouseButton::Left)),
            )
                .in_set(ChartSet::UserInput),
        );
    }
}

/// True when `pointer` is strictly within `radius` of `star`. Compared as
/// squared distances, so a pointer at exactly `radius` misses.
pub fn is_near(pointer: Vec2, star: Vec2, radius: f32) -> bool {
    pointer.distance_squared(star) < radius * radius
}

/// Any-star match against untransformed plane positions. Only meaningful in
/// overview, where the chart renders at scale 1 with no offset.
pub fn contains_pointer(constellation: &Constellation, pointer: Vec2, radius: f32) -> bool {
    constellation
        .stars
        .iter()
        .any(|star| is_near(pointer, star.position, radius))
}

/// Pointer position rebased from the window's top-left corner to its center.
/// Window coordinates and the plane are both y-down, so no flip here.
pub fn pointer_plane_position(window: &Window) -> Option<Vec2> {
    window
        .cursor_position()
        .map(|cursor| cursor - Vec2::new(window.width(), window.height()) / 2.0)
}

fn update_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    catalog: Res<Catalog>,
    config: Res<ChartConfig>,
    view: Res<ViewState>,
    mut hovered: ResMut<Hovered>,
) {
    hovered.0.clear();
    if !matches!(*view, ViewState::Overview) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(pointer) = pointer_plane_position(window) else {
        return;
    };

    for (id, constellation) in catalog.iter() {
        if contains_pointer(constellation, pointer, config.pick_radius) {
            hovered.0.push(id);
        }
    }
}

/// Click selection. A click over empty sky is a no-op; over a constellation
/// it computes the fit for the current window and enters detail.
fn select_under_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    catalog: Res<Catalog>,
    config: Res<ChartConfig>,
    mut view: ResMut<ViewState>,
    mut next_mode: ResMut<NextState<ViewMode>>,
) {
    if !matches!(*view, ViewState::Overview) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(pointer) = pointer_plane_position(window) else {
        return;
    };
    let Some((id, constellation)) = catalog
        .iter()
        .find(|(_, constellation)| contains_pointer(constellation, pointer, config.pick_radius))
    else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());
    let fit = Fit::compute(constellation.bounds(), viewport, config.fit_padding);
    debug!("selected {} at scale {:.2}", constellation.name, fit.scale);

    view.select(id, fit);
    next_mode.set(ViewMode::Detail);
}

#[cfg(test)]
mod picking_tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::catalog::StarEntry;

    /// Two stars projecting to plane (0, 0) and (40, 100).
    const PAIR: CatalogEntry = CatalogEntry {
        name:        "Pair",
        stars:       &[
            StarEntry { name: "A", ra_hours: 12.0, dec_degrees: 0.0 },
            StarEntry { name: "B", ra_hours: 13.0, dec_degrees: -10.0 },
        ],
        connections: &[[0, 1]],
        info:        "Two stars.",
        month:       "Smarch",
    };

    fn create_test_constellation() -> Constellation {
        let catalog = Catalog::from_entries(&[PAIR]).unwrap();
        catalog.get(ConstellationId(0)).unwrap().clone()
    }

    #[test]
    fn test_pointer_on_the_star_hits() {
        assert!(is_near(Vec2::ZERO, Vec2::ZERO, PICK_RADIUS));
    }

    #[test]
    fn test_pointer_just_inside_hits() {
        assert!(is_near(Vec2::new(9.9, 0.0), Vec2::ZERO, PICK_RADIUS));
    }

    #[test]
    fn test_exactly_at_radius_misses() {
        // both points sit at distance 10.0 on the nose
        assert!(!is_near(Vec2::new(10.0, 0.0), Vec2::ZERO, PICK_RADIUS));
        assert!(!is_near(Vec2::new(6.0, 8.0), Vec2::ZERO, PICK_RADIUS));
    }

    #[test]
    fn test_zero_radius_hits_nothing() {
        assert!(!is_near(Vec2::ZERO, Vec2::ZERO, 0.0));
    }

    #[test]
    fn test_fifteen_units_away_misses_the_constellation() {
        let constellation = create_test_constellation();
        assert!(!contains_pointer(&constellation, Vec2::new(15.0, 0.0), PICK_RADIUS));
    }

    #[test]
    fn test_any_single_star_carries_the_match() {
        let constellation = create_test_constellation();

        assert!(contains_pointer(&constellation, Vec2::new(3.0, 4.0), PICK_RADIUS));
        assert!(contains_pointer(&constellation, Vec2::new(38.0, 103.0), PICK_RADIUS));
    }
}
