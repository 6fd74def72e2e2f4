//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FrameAdvanced { dt } => {
            vec![AppCommand::AdvanceAnimations { dt }, AppCommand::RefillStage]
        }
        AppIntent::DragStarted {
            pointer_pos,
            translation,
        } => {
            // Nur ein Druck auf die oberste Karte startet einen Karten-Drag
            let hit = state
                .stage
                .top()
                .is_some_and(|card| card.contains_point(pointer_pos));
            if hit {
                vec![AppCommand::BeginDrag { translation }]
            } else {
                vec![]
            }
        }
        AppIntent::DragMoved { translation } => vec![AppCommand::UpdateDrag { translation }],
        AppIntent::DragReleased {
            translation,
            velocity,
        } => vec![AppCommand::EndDrag {
            translation,
            velocity,
            cancelled: false,
        }],
        AppIntent::DragCancelled {
            translation,
            velocity,
        } => vec![AppCommand::EndDrag {
            translation,
            velocity,
            cancelled: true,
        }],
        AppIntent::CardTapped { pointer_pos } => {
            let hit = state
                .stage
                .top()
                .is_some_and(|card| card.read_more_contains(pointer_pos));
            if hit {
                vec![AppCommand::TapReadMore]
            } else {
                vec![]
            }
        }
        AppIntent::DetailsClosed => vec![AppCommand::CloseDetails],
        AppIntent::DealRequested => vec![AppCommand::DealCard],
        AppIntent::OptionsRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::OptionsClosed => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsApplied { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsReset => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
