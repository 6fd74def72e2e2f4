//! Begrenztes Log der ausgeführten Commands.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    ///
    /// Frame-Commands (`AdvanceAnimations`, `RefillStage`) werden nicht geloggt,
    /// sonst verdrängen sie jede Nutzeraktion. Bei `MAX_ENTRIES` wird die ältere
    /// Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(
            command,
            AppCommand::AdvanceAnimations { .. } | AppCommand::RefillStage
        ) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Anzahl der geloggten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
