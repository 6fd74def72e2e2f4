//! Handler für Viewport, Animationstakt und das Auflegen neuer Karten.

use crate::app::AppState;
use crate::core::Card;
use glam::Vec2;
use std::rc::Rc;

/// Setzt die Viewport-Größe und gibt sie an alle Karten weiter.
pub fn set_viewport_size(state: &mut AppState, size: Vec2) {
    let size = Vec2::new(
        if size.x.is_finite() { size.x.max(0.0) } else { 0.0 },
        if size.y.is_finite() { size.y.max(0.0) } else { 0.0 },
    );
    if size == state.viewport_size {
        return;
    }
    log::debug!("Viewport-Größe: {:?}", size);
    state.viewport_size = size;
    state.stage.set_screen_size(size);
}

/// Schreitet alle Karten um `dt` voran und räumt entfernte Karten ab.
pub fn advance_animations(state: &mut AppState, dt: f32) {
    let removed = state.stage.advance(dt);
    if let Some(target) = state.drag_target {
        if removed.contains(&target) {
            state.drag_target = None;
        }
    }
    if !removed.is_empty() {
        log::debug!("{} Karte(n) abgeräumt, {} verbleiben", removed.len(), state.stage.len());
    }
}

/// Füllt den Stapel von unten auf, bis `visible_target` Karten Drags annehmen.
pub fn refill_stage(state: &mut AppState) {
    if !state.has_viewport() {
        return;
    }
    while state.stage.active_count() < state.deck.visible_target {
        let Some(card) = build_card(state) else {
            break;
        };
        state.stage.attach_at_bottom(card);
    }
}

/// Legt eine neue Karte oben auf den Stapel.
pub fn deal_card(state: &mut AppState) {
    if !state.has_viewport() {
        log::warn!("Karte kann ohne Viewport-Größe nicht aufgelegt werden");
        return;
    }
    if let Some(card) = build_card(state) {
        state.stage.attach(card);
    }
}

/// Erstellt eine Karte mit dem nächsten Datensatz, Beobachter und Weiterlesen-Aktion.
fn build_card(state: &mut AppState) -> Option<Card> {
    let record = state.deck.next_record()?;
    let mut card = Card::new(&state.options, state.viewport_size, &mut state.jitter);
    card.bind_content(&record);
    card.set_observer(&state.host);

    let host = Rc::downgrade(&state.host);
    card.set_read_more_action(move |card: &Card| {
        if let Some(host) = host.upgrade() {
            host.request_details(card.content().clone());
        }
    });
    Some(card)
}
