//! Benachrichtigungen einer Karte an ihren Host.

use super::card::Card;

/// Beobachter einer Karte.
///
/// Die Karte hält den Beobachter nur schwach (`Weak`), hält ihn also nicht am
/// Leben. Alle Methoden haben leere Standard-Implementierungen; ein Host
/// implementiert nur, was er braucht. Aufrufe erfolgen synchron im
/// UI-Thread, deshalb nehmen die Methoden `&self` (Zustand im Host über
/// `Cell`/`RefCell`).
pub trait CardObserver {
    /// Drag hat begonnen.
    fn on_drag_began(&self, _card: &Card) {}

    /// Mittelpunkt hat sich während des Drags geändert.
    fn on_position_changed(&self, _card: &Card, _center_x: f32, _center_y: f32) {}

    /// Wegwischen nach links ist abgeschlossen.
    fn on_swiped_left(&self, _card: &Card) {}

    /// Wegwischen nach rechts ist abgeschlossen.
    fn on_swiped_right(&self, _card: &Card) {}

    /// Karte kehrt in die Ruhepose zurück.
    fn on_returned_to_original(&self, _card: &Card) {}
}
