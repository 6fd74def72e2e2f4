//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport & Stapel ===
            AppCommand::SetViewportSize { size } => {
                handlers::stage::set_viewport_size(state, size)
            }
            AppCommand::AdvanceAnimations { dt } => handlers::stage::advance_animations(state, dt),
            AppCommand::RefillStage => handlers::stage::refill_stage(state),
            AppCommand::DealCard => handlers::stage::deal_card(state),

            // === Gesten ===
            AppCommand::BeginDrag { translation } => {
                handlers::gesture::begin_drag(state, translation)
            }
            AppCommand::UpdateDrag { translation } => {
                handlers::gesture::update_drag(state, translation)
            }
            AppCommand::EndDrag {
                translation,
                velocity,
                cancelled,
            } => handlers::gesture::end_drag(state, translation, velocity, cancelled),
            AppCommand::TapReadMore => handlers::gesture::tap_read_more(state),
            AppCommand::CloseDetails => handlers::gesture::close_details(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
