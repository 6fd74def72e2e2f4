//! Handler für Drag-Gesten und „Weiterlesen“ auf der obersten Karte.

use crate::app::AppState;
use crate::core::DragSample;
use glam::Vec2;

/// Beginnt einen Drag auf der obersten Karte und merkt sich deren Kennung.
pub fn begin_drag(state: &mut AppState, translation: Vec2) {
    let Some(card) = state.stage.top_mut() else {
        return;
    };
    card.handle_drag(DragSample::began(translation));
    state.drag_target = Some(card.index());
}

/// Leitet die Verschiebung an die gezogene Karte weiter.
pub fn update_drag(state: &mut AppState, translation: Vec2) {
    let Some(index) = state.drag_target else {
        return;
    };
    if let Some(card) = state.stage.get_mut(index) {
        card.handle_drag(DragSample::changed(translation));
    }
}

/// Beendet den Drag (Loslassen oder Abbruch).
pub fn end_drag(state: &mut AppState, translation: Vec2, velocity: Vec2, cancelled: bool) {
    let Some(index) = state.drag_target.take() else {
        return;
    };
    let Some(card) = state.stage.get_mut(index) else {
        return;
    };
    let sample = if cancelled {
        DragSample::cancelled(translation, velocity)
    } else {
        DragSample::ended(translation, velocity)
    };
    card.handle_drag(sample);
}

/// Löst „Weiterlesen“ der obersten Karte aus und öffnet ggf. das Detail-Fenster.
pub fn tap_read_more(state: &mut AppState) {
    let Some(card) = state.stage.top_mut() else {
        return;
    };
    if !card.tap_read_more() {
        log::debug!("Karte {} hat keine Weiterlesen-Aktion", card.index());
        return;
    }
    if let Some(content) = state.host.take_detail_request() {
        state.ui.detail = Some(content);
    }
}

/// Schließt das Detail-Fenster.
pub fn close_details(state: &mut AppState) {
    state.ui.detail = None;
}
