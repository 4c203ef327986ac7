use bevy::prelude::*;

use crate::config::ChartConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(ChartConfig::default().clear_color))
            .add_systems(Startup, spawn_chart_camera)
            .add_systems(Update, update_clear_color);
    }
}

/// One 2D camera at the origin. World (0, 0) is the viewport center, so
/// plane coordinates map straight across apart from the y flip.
fn spawn_chart_camera(mut commands: Commands) {
    commands.spawn((Name::new("chart camera"), Camera2d));
}

// ClearColor is a plain resource, so mirror it from the inspector-editable
// config whenever that changes
fn update_clear_color(config: Res<ChartConfig>, mut clear_color: ResMut<ClearColor>) {
    if config.is_changed() {
        clear_color.0 = config.clear_color;
    }
}
