//! Pose einer Karte: Mittelpunkt, Rotation/Skalierung und Alpha.

use glam::{Affine2, Vec2};

/// Rotation und gleichmäßige Skalierung einer Karte.
///
/// Die Translation steckt nicht im Transform, sondern im Mittelpunkt der
/// `CardPose`. Erst `to_affine()` setzt beides zusammen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Rotation in Radiant (positiv = im Uhrzeigersinn auf dem Bildschirm)
    pub rotation: f32,
    /// Skalierungsfaktor (1.0 = Originalgröße)
    pub scale: f32,
}

impl CardTransform {
    /// Identität: keine Rotation, Skalierung 1.0.
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        scale: 1.0,
    };

    /// Erstellt einen Transform aus Rotation (Radiant) und Skalierung.
    pub fn new(rotation: f32, scale: f32) -> Self {
        Self { rotation, scale }
    }

    /// Kombiniert Rotation und Skalierung mit dem Mittelpunkt zu einer Affinen Abbildung
    /// (lokale Kartenkoordinaten → Bildschirmkoordinaten).
    pub fn to_affine(&self, center: Vec2) -> Affine2 {
        Affine2::from_scale_angle_translation(Vec2::splat(self.scale), self.rotation, center)
    }

    /// Lineare Interpolation zwischen zwei Transforms.
    ///
    /// `t` darf außerhalb von [0, 1] liegen (Überschwingen der Feder).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            rotation: self.rotation + (other.rotation - self.rotation) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Sichtbarer Zustand einer Karte im lokalen Koordinatensystem des Hosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// Mittelpunkt der Karte
    pub center: Vec2,
    /// Rotation und Skalierung um den Mittelpunkt
    pub transform: CardTransform,
    /// Deckkraft (0.0 = unsichtbar, 1.0 = voll sichtbar)
    pub alpha: f32,
}

impl CardPose {
    /// Erstellt eine Pose.
    pub fn new(center: Vec2, transform: CardTransform, alpha: f32) -> Self {
        Self {
            center,
            transform,
            alpha,
        }
    }

    /// Abbildung lokaler Kartenkoordinaten (Ursprung = Kartenmitte) auf den Host.
    pub fn affine(&self) -> Affine2 {
        self.transform.to_affine(self.center)
    }

    /// Prüft, ob ein Host-Punkt innerhalb einer Karte der Größe `size` liegt.
    pub fn contains(&self, size: Vec2, point: Vec2) -> bool {
        if self.transform.scale.abs() <= f32::EPSILON {
            return false;
        }
        let local = self.affine().inverse().transform_point2(point);
        let half = size * 0.5;
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }
}
