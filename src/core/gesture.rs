//! Drag-Samples und Scratch-Zustand eines laufenden Drags.

use glam::Vec2;

/// Phase eines Drag-Samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Finger/Zeiger hat den Drag begonnen
    Began,
    /// Position hat sich geändert
    Changed,
    /// Drag regulär beendet
    Ended,
    /// Drag von der Plattform abgebrochen
    Cancelled,
}

/// Ein einzelnes Drag-Sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Phase des Samples
    pub phase: DragPhase,
    /// Kumulierte Verschiebung seit Drag-Beginn
    pub translation: Vec2,
    /// Momentangeschwindigkeit (nur beim Loslassen relevant, Punkte/s)
    pub velocity: Vec2,
}

impl DragSample {
    /// Drag-Beginn mit bereits aufgelaufener Verschiebung.
    pub fn began(translation: Vec2) -> Self {
        Self {
            phase: DragPhase::Began,
            translation,
            velocity: Vec2::ZERO,
        }
    }

    /// Positionsänderung.
    pub fn changed(translation: Vec2) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation,
            velocity: Vec2::ZERO,
        }
    }

    /// Reguläres Drag-Ende mit Loslass-Geschwindigkeit.
    pub fn ended(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation,
            velocity,
        }
    }

    /// Abgebrochener Drag.
    pub fn cancelled(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase: DragPhase::Cancelled,
            translation,
            velocity,
        }
    }

    /// Kopie mit nicht-endlichen Komponenten durch 0 ersetzt.
    pub fn sanitized(self) -> Self {
        Self {
            translation: finite_or_zero(self.translation),
            velocity: finite_or_zero(self.velocity),
            ..self
        }
    }
}

fn finite_or_zero(v: Vec2) -> Vec2 {
    Vec2::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
    )
}

/// Normierte Verschiebung: Translation / Bildschirmgröße, je Achse auf [-1, 1] geklemmt.
///
/// Eine Bildschirmdimension <= 0 liefert für diese Achse 0.
pub fn drag_ratio(translation: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(
        axis_ratio(translation.x, screen.x),
        axis_ratio(translation.y, screen.y),
    )
}

fn axis_ratio(offset: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    let ratio = offset / extent;
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(-1.0, 1.0)
    }
}

/// Scratch-Zustand eines Drags. Wird nach jedem Loslassen zurückgesetzt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    /// Kartenmittelpunkt zu Drag-Beginn abzüglich der Start-Translation
    pub original_point: Vec2,
    /// Letzte kumulierte Translation
    pub translation: Vec2,
    /// Letzte normierte Verschiebung (x, y) in [-1, 1]
    pub ratio: Vec2,
}

impl DragTracker {
    /// Merkt sich den Ursprung, sodass `original_point + translation` stets
    /// die Kartenposition ergibt.
    pub fn begin(&mut self, center: Vec2, translation: Vec2) {
        self.translation = translation;
        self.original_point = center - translation;
        self.ratio = Vec2::ZERO;
    }

    /// Aktualisiert Translation und Verhältnis und liefert den neuen Mittelpunkt.
    pub fn update(&mut self, translation: Vec2, screen: Vec2) -> Vec2 {
        self.translation = translation;
        self.ratio = drag_ratio(translation, screen);
        self.original_point + translation
    }

    /// Setzt Ursprung, Translation und Verhältnis auf Null.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true`, wenn alle Felder auf Null stehen.
    pub fn is_reset(&self) -> bool {
        *self == Self::default()
    }
}
