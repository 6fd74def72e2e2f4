//! Application State — zentrale Datenhaltung.

use super::host::DeckHost;
use super::samples;
use super::CommandLog;
use crate::core::{CardContent, CardStage, RandomJitter, RecipeRecord};
use crate::shared::CardOptions;
use glam::Vec2;
use std::rc::Rc;

/// Anzahl gleichzeitig aufgelegter Karten, die der Host anstrebt.
pub const DEFAULT_VISIBLE_CARDS: usize = 3;

/// Datensätze und Auffüll-Zustand des Kartenstapels
#[derive(Debug, Clone)]
pub struct DeckState {
    /// Quelle der Karteninhalte (wird zyklisch durchlaufen)
    pub records: Vec<RecipeRecord>,
    /// Nächster zu bindender Datensatz
    pub next_record: usize,
    /// Angestrebte Anzahl aktiver Karten
    pub visible_target: usize,
}

impl DeckState {
    /// Erstellt den Stapel-Zustand aus Datensätzen.
    pub fn new(records: Vec<RecipeRecord>) -> Self {
        Self {
            records,
            next_record: 0,
            visible_target: DEFAULT_VISIBLE_CARDS,
        }
    }

    /// Liefert den nächsten Datensatz (zyklisch) oder `None` ohne Datensätze.
    pub fn next_record(&mut self) -> Option<RecipeRecord> {
        if self.records.is_empty() {
            return None;
        }
        let record = self.records[self.next_record % self.records.len()].clone();
        self.next_record = (self.next_record + 1) % self.records.len();
        Some(record)
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Optionen-Dialog sichtbar ist
    pub show_options_dialog: bool,
    /// Inhalt des Detail-Fensters („Weiterlesen“), `None` = geschlossen
    pub detail: Option<CardContent>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen (gelten für neu erstellte Karten)
    pub options: CardOptions,
    /// Eingehängte Karten
    pub stage: CardStage,
    /// Beobachter aller Karten
    pub host: Rc<DeckHost>,
    /// Datensätze und Auffüll-Zustand
    pub deck: DeckState,
    /// Größe des Karten-Viewports
    pub viewport_size: Vec2,
    /// Kennung der Karte, die gerade gezogen wird
    pub drag_target: Option<usize>,
    /// Zufallsquelle für Start- und Ruhepose
    pub jitter: RandomJitter,
    /// Dialog-Zustand
    pub ui: UiState,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Anwendung soll beendet werden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt den Zustand mit den eingebauten Beispiel-Rezepten.
    pub fn new() -> Self {
        let records = samples::sample_records().unwrap_or_else(|e| {
            log::error!("Beispiel-Rezepte konnten nicht gelesen werden: {:#}", e);
            Vec::new()
        });
        Self::with_records(records, RandomJitter::new())
    }

    /// Erstellt den Zustand mit eigenen Datensätzen und Zufallsquelle.
    pub fn with_records(records: Vec<RecipeRecord>, jitter: RandomJitter) -> Self {
        Self {
            options: CardOptions::default(),
            stage: CardStage::new(),
            host: Rc::new(DeckHost::new()),
            deck: DeckState::new(records),
            viewport_size: Vec2::ZERO,
            drag_target: None,
            jitter,
            ui: UiState::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// `true`, sobald der Viewport eine nutzbare Größe hat.
    pub fn has_viewport(&self) -> bool {
        self.viewport_size.x > 0.0 && self.viewport_size.y > 0.0
    }
}
