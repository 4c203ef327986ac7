mod data;
mod projection;
mod types;

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

pub use crate::catalog::types::Bounds;
pub use crate::catalog::types::Catalog;
pub use crate::catalog::types::CatalogEntry;
pub use crate::catalog::types::CatalogError;
pub use crate::catalog::types::Constellation;
pub use crate::catalog::types::ConstellationId;
pub use crate::catalog::types::Star;
pub use crate::catalog::types::StarEntry;

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_catalog);
    }
}

/// Builds and validates the zodiac catalog before anything draws. A bad
/// entry is a programming error in the shipped table, so report it and
/// exit instead of limping along with half a sky.
fn load_catalog(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    match Catalog::standard() {
        Ok(catalog) => {
            if catalog.is_empty() {
                warn!("catalog is empty, nothing will draw");
            }
            info!("catalog loaded: {} constellations", catalog.len());
            commands.insert_resource(catalog);
        },
        Err(error) => {
            error!("catalog rejected: {error}");
            exit.write(AppExit::error());
        },
    }
}
