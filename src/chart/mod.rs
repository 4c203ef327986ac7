mod dots;
mod fit;
mod lines;
mod picking;

use bevy::prelude::*;

use crate::chart::dots::DotsPlugin;
pub use crate::chart::fit::FIT_PADDING;
pub use crate::chart::fit::Fit;
use crate::chart::lines::LinesPlugin;
pub use crate::chart::picking::PICK_RADIUS;
use crate::chart::picking::PickingPlugin;

pub struct ChartPlugin;

impl Plugin for ChartPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DotsPlugin)
            .add_plugins(LinesPlugin)
            .add_plugins(PickingPlugin);
    }
}

/// Plane space is y-down with its origin at the viewport center (the window
/// convention, shared with the pointer); world space is y-up. The flip
/// happens exactly once, right here.
pub const fn plane_to_world(position: Vec2) -> Vec2 { Vec2::new(position.x, -position.y) }
