//! Entscheidung beim Loslassen: wegwischen (links/rechts) oder zurückfedern.

use crate::shared::CardOptions;
use glam::Vec2;

/// Richtung, in die eine Karte weggewischt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Nach links aus dem Bildschirm
    Left,
    /// Nach rechts aus dem Bildschirm
    Right,
}

impl SwipeDirection {
    /// Vorzeichen der horizontalen Zielposition (-1 / +1).
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Ergebnis der Schwellenprüfung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Karte verlässt den Bildschirm
    Dismiss(SwipeDirection),
    /// Karte federt in die Ruhepose zurück
    Restore,
}

/// Wegwisch-Schwellen als Anteil der Bildschirmgröße.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeLimits {
    /// Horizontale Schwelle in (0, 1)
    pub x: f32,
    /// Vertikale Schwelle in (0, 1)
    pub y: f32,
}

impl SwipeLimits {
    /// Erstellt Schwellen aus zwei Verhältnissen.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Übernimmt die Schwellen aus den Optionen.
    pub fn from_options(options: &CardOptions) -> Self {
        Self::new(options.swipe_x_pos_limit_ratio, options.swipe_y_pos_limit_ratio)
    }
}

/// Wertet die Schwellen für ein (bereits geklemmtes) Drag-Verhältnis aus.
///
/// Wegwischen verlangt beide Bedingungen: das horizontale Verhältnis
/// überschreitet `limits.x` mit Vorzeichen der Richtung UND der Betrag des
/// vertikalen Verhältnisses überschreitet `limits.y`.
pub fn evaluate_release(ratio: Vec2, limits: SwipeLimits) -> SwipeDecision {
    let vertical_ok = ratio.y.abs() > limits.y;
    if ratio.x < -limits.x && vertical_ok {
        SwipeDecision::Dismiss(SwipeDirection::Left)
    } else if ratio.x > limits.x && vertical_ok {
        SwipeDecision::Dismiss(SwipeDirection::Right)
    } else {
        SwipeDecision::Restore
    }
}
