//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::CardOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Ungültige Optionen werden abgelehnt, der bisherige Stand bleibt erhalten.
/// Die Optionen gelten für neu aufgelegte Karten.
pub fn apply_options(state: &mut AppState, options: CardOptions) -> anyhow::Result<()> {
    options.validate()?;
    state.options = options;
    let path = CardOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = CardOptions::default();
    let path = CardOptions::config_path();
    state.options.save_to_file(&path)
}
