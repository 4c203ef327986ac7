use bevy::dev_tools::states::*;
use bevy::ecs::message::MessageReader;
use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::catalog::Catalog;
use crate::catalog::ConstellationId;
use crate::chart::Fit;
use crate::config::ChartConfig;
use crate::schedule::ChartSet;

pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewMode>()
            .init_resource::<ViewState>()
            .add_systems(
                Update,
                (
                    return_to_overview
                        .in_set(ChartSet::UserInput)
                        .run_if(in_state(ViewMode::Detail))
                        .run_if(input_just_pressed(KeyCode::Escape)),
                    refit_on_resize
                        .in_set(ChartSet::ViewUpdates)
                        .run_if(in_state(ViewMode::Detail)),
                ),
            )
            .add_systems(Update, log_transitions::<ViewMode>);
    }
}

/// Which of the two chart views is active. This is the scheduling-facing
/// twin of [`ViewState`]: `OnEnter`, `OnExit` and `in_state` hang off this
/// enum while the selection payload lives in the resource. The same
/// transition systems always write both.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Reflect, States)]
pub enum ViewMode {
    #[default]
    Overview,
    Detail,
}

/// The whole view in one value: everything at scale 1, or one constellation
/// selected with its cached fit. Mutation goes through the transition
/// methods below and nowhere else, so every writer gets the same no-op
/// rules.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Overview,
    Detail {
        selected: ConstellationId,
        fit:      Fit,
    },
}

impl ViewState {
    /// Enters detail for `selected` with a freshly computed fit. Ignored
    /// when a selection is already active; there is no reselect in detail.
    pub const fn select(&mut self, selected: ConstellationId, fit: Fit) {
        if matches!(self, Self::Overview) {
            *self = Self::Detail { selected, fit };
        }
    }

    /// Returns to overview, dropping the selection and its fit. Idempotent,
    /// so every back affordance can fire it without checking first.
    pub const fn back(&mut self) { *self = Self::Overview; }

    /// Swaps in a fit recomputed for a new viewport. Overview caches no
    /// fit, so this is a no-op there.
    pub const fn refit(&mut self, new_fit: Fit) {
        if let Self::Detail { fit, .. } = self {
            *fit = new_fit;
        }
    }

    pub const fn selected(&self) -> Option<ConstellationId> {
        match self {
            Self::Overview => None,
            Self::Detail { selected, .. } => Some(*selected),
        }
    }
}

/// Escape backs out of detail. The hud button routes through the same pair
/// of writes, so the two affordances cannot drift apart.
fn return_to_overview(mut view: ResMut<ViewState>, mut next_mode: ResMut<NextState<ViewMode>>) {
    debug!("escape pressed, returning to overview");
    view.back();
    next_mode.set(ViewMode::Overview);
}

/// A resize while a selection is active recomputes the cached fit for the
/// new viewport. Overview ignores resizes; it caches nothing.
fn refit_on_resize(
    mut resized: MessageReader<WindowResized>,
    catalog: Res<Catalog>,
    config: Res<ChartConfig>,
    mut view: ResMut<ViewState>,
) {
    let Some(resize) = resized.read().last() else {
        return;
    };
    let Some(selected) = view.selected() else {
        return;
    };
    let Some(constellation) = catalog.get(selected) else {
        return;
    };

    let viewport = Vec2::new(resize.width, resize.height);
    view.refit(Fit::compute(constellation.bounds(), viewport, config.fit_padding));
    debug!("refit {} to {}x{}", constellation.name, resize.width, resize.height);
}
