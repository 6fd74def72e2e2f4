//! Host der Karten: zählt Benachrichtigungen und nimmt Detail-Anfragen entgegen.

use crate::core::{Card, CardContent, CardObserver};
use glam::Vec2;
use std::cell::{Cell, RefCell};

/// Zähler über alle Karten-Benachrichtigungen
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeckStats {
    /// Begonnene Drags
    pub drags_began: u32,
    /// Nach links weggewischte Karten
    pub swiped_left: u32,
    /// Nach rechts weggewischte Karten
    pub swiped_right: u32,
    /// Zurückgefederte Karten
    pub returned: u32,
    /// Letzte gemeldete Position (Kennung, Mittelpunkt)
    pub last_position: Option<(usize, Vec2)>,
}

/// Beobachter aller Karten auf der Bühne.
///
/// Wird als `Rc` im `AppState` gehalten; die Karten halten nur `Weak`.
#[derive(Debug, Default)]
pub struct DeckHost {
    stats: Cell<DeckStats>,
    detail_request: RefCell<Option<CardContent>>,
}

impl DeckHost {
    /// Erstellt einen Host ohne Zählerstände.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Zählerstände.
    pub fn stats(&self) -> DeckStats {
        self.stats.get()
    }

    /// Merkt sich den Inhalt für das Detail-Fenster.
    pub fn request_details(&self, content: CardContent) {
        *self.detail_request.borrow_mut() = Some(content);
    }

    /// Holt eine offene Detail-Anfrage ab.
    pub fn take_detail_request(&self) -> Option<CardContent> {
        self.detail_request.borrow_mut().take()
    }

    fn update(&self, f: impl FnOnce(&mut DeckStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

impl CardObserver for DeckHost {
    fn on_drag_began(&self, card: &Card) {
        log::debug!("Drag auf Karte {} begonnen", card.index());
        self.update(|s| s.drags_began += 1);
    }

    fn on_position_changed(&self, card: &Card, center_x: f32, center_y: f32) {
        self.update(|s| s.last_position = Some((card.index(), Vec2::new(center_x, center_y))));
    }

    fn on_swiped_left(&self, card: &Card) {
        log::info!("Karte {} nach links gewischt: {}", card.index(), card.content().title);
        self.update(|s| s.swiped_left += 1);
    }

    fn on_swiped_right(&self, card: &Card) {
        log::info!("Karte {} nach rechts gewischt: {}", card.index(), card.content().title);
        self.update(|s| s.swiped_right += 1);
    }

    fn on_returned_to_original(&self, card: &Card) {
        log::debug!("Karte {} federt zurück", card.index());
        self.update(|s| s.returned += 1);
    }
}
