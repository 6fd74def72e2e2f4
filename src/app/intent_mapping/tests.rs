use crate::app::{AppCommand, AppController, AppIntent, AppState};
use crate::core::{RandomJitter, RecipeRecord};
use glam::Vec2;

use super::map_intent_to_commands;

fn state_with_idle_cards() -> AppState {
    let records = vec![RecipeRecord {
        recipe_title: "Test".into(),
        ..RecipeRecord::default()
    }];
    let mut state = AppState::with_records(records, RandomJitter::seeded(7));
    let mut controller = AppController::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: Vec2::new(400.0, 800.0),
            },
        )
        .expect("Viewport setzen");
    controller
        .handle_intent(&mut state, AppIntent::FrameAdvanced { dt: 0.0 })
        .expect("Auffüllen");
    controller
        .handle_intent(&mut state, AppIntent::FrameAdvanced { dt: 5.0 })
        .expect("Einflug abschließen");
    state
}

#[test]
fn frame_advanced_maps_to_advance_then_refill() {
    let state = AppState::with_records(Vec::new(), RandomJitter::seeded(1));

    let commands = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt: 0.016 });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::AdvanceAnimations { dt } if dt == 0.016));
    assert!(matches!(commands[1], AppCommand::RefillStage));
}

#[test]
fn drag_started_outside_top_card_maps_to_nothing() {
    let state = state_with_idle_cards();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DragStarted {
            pointer_pos: Vec2::new(2.0, 2.0),
            translation: Vec2::ZERO,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_started_on_top_card_maps_to_begin_drag() {
    let state = state_with_idle_cards();
    let center = state.stage.top().expect("oberste Karte").pose().center;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DragStarted {
            pointer_pos: center,
            translation: Vec2::new(1.0, 0.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginDrag { translation } if translation.x == 1.0));
}

#[test]
fn drag_started_without_cards_maps_to_nothing() {
    let state = AppState::with_records(Vec::new(), RandomJitter::seeded(1));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DragStarted {
            pointer_pos: Vec2::new(200.0, 400.0),
            translation: Vec2::ZERO,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_released_and_cancelled_map_to_end_drag() {
    let state = AppState::with_records(Vec::new(), RandomJitter::seeded(1));

    let released = map_intent_to_commands(
        &state,
        AppIntent::DragReleased {
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
        },
    );
    let cancelled = map_intent_to_commands(
        &state,
        AppIntent::DragCancelled {
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
        },
    );

    assert!(matches!(released[0], AppCommand::EndDrag { cancelled: false, .. }));
    assert!(matches!(cancelled[0], AppCommand::EndDrag { cancelled: true, .. }));
}

#[test]
fn tap_outside_read_more_area_maps_to_nothing() {
    let state = state_with_idle_cards();
    let center = state.stage.top().expect("oberste Karte").pose().center;

    let commands = map_intent_to_commands(&state, AppIntent::CardTapped { pointer_pos: center });

    assert!(commands.is_empty());
}
