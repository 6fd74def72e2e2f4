//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
mod intent_mapping;
pub mod samples;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Stapel, Optionen, Dialoge).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use host::{DeckHost, DeckStats};
pub use state::{AppState, DeckState, UiState};
