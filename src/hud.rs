use bevy::color::palettes::tailwind;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::window::WindowResized;

use crate::catalog::Catalog;
use crate::schedule::ChartSet;
use crate::state::ViewMode;
use crate::state::ViewState;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewMode::Detail), spawn_detail_hud)
            .add_systems(OnExit(ViewMode::Detail), despawn_detail_hud)
            .add_systems(
                Update,
                (
                    update_back_button.in_set(ChartSet::UserInput),
                    rewrap_info_text.in_set(ChartSet::ViewUpdates),
                )
                    .run_if(in_state(ViewMode::Detail)),
            );
    }
}

// everything hangs off the left margin at fixed offsets
const HUD_MARGIN: f32 = 20.0;
const BUTTON_TOP: f32 = 20.0;
const NAME_TOP: f32 = 70.0;
const MONTH_TOP: f32 = 100.0;
const INFO_TOP: f32 = 130.0;
const NAME_FONT_SIZE: f32 = 20.0;
const BODY_FONT_SIZE: f32 = 14.0;

const BUTTON_NORMAL: Srgba = tailwind::SLATE_800;
const BUTTON_HOVERED: Srgba = tailwind::SLATE_700;
const BUTTON_PRESSED: Srgba = tailwind::SLATE_600;

/// Marker for every hud entity, so leaving detail can sweep them all.
#[derive(Component)]
struct DetailHud;

#[derive(Component)]
struct BackButton;

/// The wrapping info paragraph; resizes retarget its `max_width`.
#[derive(Component)]
struct InfoBody;

fn spawn_detail_hud(
    mut commands: Commands,
    catalog: Res<Catalog>,
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(selected) = view.selected() else {
        return;
    };
    let Some(constellation) = catalog.get(selected) else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    debug!("showing hud for {}", constellation.name);

    commands
        .spawn((
            DetailHud,
            BackButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_MARGIN),
                top: Val::Px(BUTTON_TOP),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(BUTTON_NORMAL.into()),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("\u{2190} Back"),
                TextFont {
                    font_size: BODY_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });

    commands.spawn((
        DetailHud,
        Text::new(constellation.name),
        TextFont {
            font_size: NAME_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            top: Val::Px(NAME_TOP),
            ..default()
        },
    ));

    commands.spawn((
        DetailHud,
        Text::new(format!("Month: {}", constellation.month)),
        TextFont {
            font_size: BODY_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            top: Val::Px(MONTH_TOP),
            ..default()
        },
    ));

    commands.spawn((
        DetailHud,
        InfoBody,
        Text::new(constellation.info),
        TextFont {
            font_size: BODY_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_MARGIN),
            top: Val::Px(INFO_TOP),
            max_width: Val::Px(info_wrap_width(window.width())),
            ..default()
        },
    ));
}

fn despawn_detail_hud(mut commands: Commands, hud: Query<Entity, With<DetailHud>>) {
    for entity in &hud {
        commands.entity(entity).despawn();
    }
}

/// Hover styling plus the actual back action. The button funnels into the
/// same view transition as the Escape key.
fn update_back_button(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<BackButton>),
    >,
    mut view: ResMut<ViewState>,
    mut next_mode: ResMut<NextState<ViewMode>>,
) {
    for (interaction, mut background) in &mut interactions {
        match interaction {
            Interaction::Pressed => {
                debug!("back button pressed");
                background.0 = BUTTON_PRESSED.into();
                view.back();
                next_mode.set(ViewMode::Overview);
            },
            Interaction::Hovered => background.0 = BUTTON_HOVERED.into(),
            Interaction::None => background.0 = BUTTON_NORMAL.into(),
        }
    }
}

/// Keeps the info paragraph wrapping at a third of the window width as
/// the window resizes.
fn rewrap_info_text(
    mut resized: MessageReader<WindowResized>,
    mut info_nodes: Query<&mut Node, With<InfoBody>>,
) {
    let Some(resize) = resized.read().last() else {
        return;
    };
    for mut node in &mut info_nodes {
        node.max_width = Val::Px(info_wrap_width(resize.width));
    }
}

/// A third of the window less the margin, so the text column never crowds
/// the fitted constellation.
const fn info_wrap_width(window_width: f32) -> f32 { (window_width / 3.0 - 40.0).max(0.0) }
