use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::chart::FIT_PADDING;
use crate::chart::PICK_RADIUS;

pub struct ChartConfigPlugin;

impl Plugin for ChartConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<ChartConfig>::default()
                .run_if(input_toggle_active(false, KeyCode::F12)),
        )
        .init_resource::<ChartConfig>();
    }
}

/// Chart look and interaction tuning, all live through the F12 inspector.
/// Defaults are white dots on black, blue figure lines in detail, faint
/// white preview lines on hover.
#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct ChartConfig {
    pub clear_color:           Color,
    pub star_color:            Color,
    pub connection_line_color: Color,
    pub hover_line_color:      Color,
    /// Dot radius in logical pixels, constant across both views.
    #[inspector(min = 0.5, max = 10.0, display = NumberDisplay::Slider)]
    pub star_radius:           f32,
    #[inspector(min = 0.5, max = 10.0, display = NumberDisplay::Slider)]
    pub connection_line_width: f32,
    #[inspector(min = 0.5, max = 10.0, display = NumberDisplay::Slider)]
    pub hover_line_width:      f32,
    /// Hit-test radius around a star, in plane-units.
    #[inspector(min = 1.0, max = 100.0, display = NumberDisplay::Slider)]
    pub pick_radius:           f32,
    #[inspector(min = 0.0, max = 200.0, display = NumberDisplay::Slider)]
    pub fit_padding:           f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            clear_color:           Color::BLACK,
            star_color:            Color::WHITE,
            connection_line_color: Color::srgb_u8(0, 120, 255),
            hover_line_color:      Color::WHITE.with_alpha(50.0 / 255.0),
            star_radius:           2.5,
            connection_line_width: 1.5,
            hover_line_width:      2.0,
            pick_radius:           PICK_RADIUS,
            fit_padding:           FIT_PADDING,
        }
    }
}
