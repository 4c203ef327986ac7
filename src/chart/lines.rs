use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::chart::picking::Hovered;
use crate::chart::plane_to_world;
use crate::config::ChartConfig;
use crate::schedule::ChartSet;
use crate::state::ViewState;

pub struct LinesPlugin;

impl Plugin for LinesPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<ConnectionGizmo>()
            .init_gizmo_group::<HoverGizmo>()
            .add_systems(Update, update_line_widths)
            .add_systems(
                Update,
                (draw_hover_lines, draw_connection_lines).in_set(ChartSet::Render),
            );
    }
}

/// Detail-view connection lines.
#[derive(Default, Reflect, GizmoConfigGroup)]
struct ConnectionGizmo {}

/// Overview hover highlight lines.
#[derive(Default, Reflect, GizmoConfigGroup)]
struct HoverGizmo {}

/// Line widths live in [`ChartConfig`] where the inspector can reach them;
/// gizmos read widths from their own config store, so sync every frame.
fn update_line_widths(mut config_store: ResMut<GizmoConfigStore>, config: Res<ChartConfig>) {
    let (connection, _) = config_store.config_mut::<ConnectionGizmo>();
    connection.line.width = config.connection_line_width;

    let (hover, _) = config_store.config_mut::<HoverGizmo>();
    hover.line.width = config.hover_line_width;
}

/// Faint figure preview for whatever the pointer is over. Plane positions
/// go straight through because overview renders at scale 1.
fn draw_hover_lines(
    mut gizmos: Gizmos<HoverGizmo>,
    catalog: Res<Catalog>,
    view: Res<ViewState>,
    hovered: Res<Hovered>,
    config: Res<ChartConfig>,
) {
    if !matches!(*view, ViewState::Overview) {
        return;
    }
    for &id in &hovered.0 {
        let Some(constellation) = catalog.get(id) else {
            continue;
        };
        // connection indices are validated at catalog construction
        for &[a, b] in constellation.connections {
            gizmos.line_2d(
                plane_to_world(constellation.stars[a].position),
                plane_to_world(constellation.stars[b].position),
                config.hover_line_color,
            );
        }
    }
}

/// The selected constellation's figure, mapped through the cached fit.
fn draw_connection_lines(
    mut gizmos: Gizmos<ConnectionGizmo>,
    catalog: Res<Catalog>,
    view: Res<ViewState>,
    config: Res<ChartConfig>,
) {
    let ViewState::Detail { selected, fit } = *view else {
        return;
    };
    let Some(constellation) = catalog.get(selected) else {
        return;
    };

    for &[a, b] in constellation.connections {
        gizmos.line_2d(
            plane_to_world(fit.apply(constellation.stars[a].position)),
            plane_to_world(fit.apply(constellation.stars[b].position)),
            config.connection_line_color,
        );
    }
}
