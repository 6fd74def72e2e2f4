//! Start- und Ruhepose einer neuen Karte (mit zufälligem Jitter).

use super::jitter::JitterSource;
use super::pose::{CardPose, CardTransform};
use crate::shared::CardOptions;
use glam::Vec2;

/// Jitter des Ruhe-Mittelpunkts in Punkten (je Achse).
pub const REST_POSITION_JITTER: i32 = 8;
/// Jitter der Ruhe-Rotation in Grad (wird zusätzlich mit `REST_ROTATION_FACTOR` skaliert).
pub const REST_ROTATION_JITTER_DEG: i32 = 6;
/// Skalierung der Ruhe-Rotation.
pub const REST_ROTATION_FACTOR: f32 = 0.25;
/// Horizontaler Start-Versatz in Punkten.
pub const START_OFFSET_X: i32 = 300;
/// Vertikaler Start-Versatz über dem oberen Rand (Bereich, Vorzeichen negativ).
pub const START_OFFSET_Y_MIN: i32 = 300;
/// Siehe `START_OFFSET_Y_MIN`.
pub const START_OFFSET_Y_MAX: i32 = 600;
/// Start-Rotation in Grad.
pub const START_ROTATION_DEG: i32 = 90;

/// Ergebnis der Einflug-Planung: woher die Karte kommt und wo sie ruht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrancePlan {
    /// Pose vor dem Einflug (außerhalb des Bildschirms, unsichtbar)
    pub start: CardPose,
    /// Ruhepose (Ziel des Einflugs und jedes Rückfederns)
    pub resting: CardPose,
}

impl EntrancePlan {
    /// Würfelt Ruhe- und Startpose für einen Bildschirm der Größe `screen`.
    ///
    /// Reihenfolge der Ziehungen: Ruhe-X, Ruhe-Y, Ruhe-Rotation,
    /// Start-X, Start-Y, Start-Rotation.
    pub fn roll(screen: Vec2, options: &CardOptions, jitter: &mut impl JitterSource) -> Self {
        let rest_dx = jitter.draw(-REST_POSITION_JITTER..=REST_POSITION_JITTER) as f32;
        let rest_dy = jitter.draw(-REST_POSITION_JITTER..=REST_POSITION_JITTER) as f32;
        let rest_deg = jitter.draw(-REST_ROTATION_JITTER_DEG..=REST_ROTATION_JITTER_DEG) as f32;

        let resting = CardPose::new(
            screen * 0.5 + Vec2::new(rest_dx, rest_dy),
            CardTransform::new(
                rest_deg.to_radians() * REST_ROTATION_FACTOR,
                options.after_initialize_scale,
            ),
            1.0,
        );

        let start_x = jitter.draw(-START_OFFSET_X..=START_OFFSET_X) as f32;
        let start_y = -(jitter.draw(START_OFFSET_Y_MIN..=START_OFFSET_Y_MAX) as f32);
        let start_deg = jitter.draw(-START_ROTATION_DEG..=START_ROTATION_DEG) as f32;

        let start = CardPose::new(
            Vec2::new(start_x, start_y),
            CardTransform::new(start_deg.to_radians(), options.before_initialize_scale),
            0.0,
        );

        Self { start, resting }
    }
}
