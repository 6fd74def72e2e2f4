//! Host-Container, in den Karten eingehängt werden.

use super::card::Card;
use glam::Vec2;

/// Hält die eingehängten Karten (unten → oben) und räumt entfernte Karten ab.
#[derive(Debug, Default)]
pub struct CardStage {
    cards: Vec<Card>,
    next_index: usize,
}

impl CardStage {
    /// Erstellt einen leeren Container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Karte oben ein, vergibt ihre Kennung und gibt sie zurück.
    pub fn attach(&mut self, mut card: Card) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        card.set_index(index);
        self.cards.push(card);
        log::debug!("Karte {} eingehängt ({} sichtbar)", index, self.cards.len());
        index
    }

    /// Hängt eine Karte ganz unten ein (hinter alle anderen) und gibt ihre Kennung zurück.
    pub fn attach_at_bottom(&mut self, mut card: Card) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        card.set_index(index);
        self.cards.insert(0, card);
        log::debug!("Karte {} unten eingehängt ({} sichtbar)", index, self.cards.len());
        index
    }

    /// Schreitet alle Karten voran und entfernt abgeschlossene.
    ///
    /// Gibt die Kennungen der in diesem Schritt entfernten Karten zurück.
    pub fn advance(&mut self, dt: f32) -> Vec<usize> {
        for card in &mut self.cards {
            card.advance(dt);
        }
        let mut removed = Vec::new();
        self.cards.retain(|card| {
            if card.is_detached() {
                removed.push(card.index());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Oberste Karte, die noch Drags annimmt.
    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.iter_mut().rev().find(|card| card.accepts_drag())
    }

    /// Oberste Karte, die noch Drags annimmt (nur lesend).
    pub fn top(&self) -> Option<&Card> {
        self.cards.iter().rev().find(|card| card.accepts_drag())
    }

    /// Karte mit der Kennung `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.index() == index)
    }

    /// Alle Karten, unten → oben.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Anzahl eingehängter Karten.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// `true` ohne Karten.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Karten, die Drags annehmen (also nicht gerade weggewischt werden).
    pub fn active_count(&self) -> usize {
        self.cards.iter().filter(|card| card.accepts_drag()).count()
    }

    /// `true`, solange irgendeine Karte animiert.
    pub fn is_animating(&self) -> bool {
        self.cards.iter().any(Card::is_animating)
    }

    /// Gibt die neue Bildschirmgröße an alle Karten weiter.
    pub fn set_screen_size(&mut self, screen: Vec2) {
        for card in &mut self.cards {
            card.set_screen_size(screen);
        }
    }
}
