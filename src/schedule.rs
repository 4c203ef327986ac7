use bevy::prelude::*;

use crate::catalog::Catalog;

/// Frame phases for the chart. Pointer input resolves first, view updates
/// (layout, refits) second, line drawing last, so a click is fully applied
/// before anything renders its result.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum ChartSet {
    UserInput,
    ViewUpdates,
    Render,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        const CHART_SETS: (ChartSet, ChartSet, ChartSet) = (
            ChartSet::UserInput,
            ChartSet::ViewUpdates,
            ChartSet::Render,
        );

        app.configure_sets(
            Update,
            CHART_SETS
                .chain()
                // every chart system sits in one of these sets, so this one
                // run condition quietly idles the entire chart when startup
                // validation rejected the catalog and the app is on its way
                // out - no system has to null-check the resource itself
                .run_if(resource_exists::<Catalog>),
        );
    }
}
