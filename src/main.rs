//! Constellarium - an interactive star chart built with Bevy 0.18
//!
//! A 2D zodiac chart featuring:
//! - An all-sky overview with hover highlighting
//! - Click-to-zoom detail views fitted to the window
//! - Bevy Remote Protocol (BRP) support for debugging

mod camera;
mod catalog;
mod chart;
mod config;
mod hud;
mod schedule;
mod state;

use bevy::prelude::*;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::camera::CameraPlugin;
use crate::catalog::CatalogPlugin;
use crate::chart::ChartPlugin;
use crate::config::ChartConfigPlugin;
use crate::hud::HudPlugin;
use crate::schedule::SchedulePlugin;
use crate::state::StatePlugin;

fn main() {
    let mut app = App::new();

    // Get effective port from BrpExtrasPlugin to include in window title if non-default
    let brp_plugin = BrpExtrasPlugin::default();
    let (effective_port, _) = brp_plugin.get_effective_port();
    let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
        "constellarium".to_string()
    } else {
        format!("constellarium - {effective_port}")
    };

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins((
        EguiPlugin::default(),
        brp_plugin,
        CameraPlugin,
        CatalogPlugin,
        ChartConfigPlugin,
        ChartPlugin,
        HudPlugin,
        SchedulePlugin,
        StatePlugin,
    ))
    .run();
}
