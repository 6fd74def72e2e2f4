//! Zeitgesteuerte Übergänge zwischen Posen.
//!
//! Jede animierbare Eigenschaft (Mittelpunkt, Transform, Alpha) hat genau
//! eine Spur. Ein neuer Übergang oder ein direktes Setzen ersetzt die
//! laufende Spur dieser Eigenschaft (der letzte Schreiber gewinnt). Ein
//! Übergang ist abgeschlossen, sobald ihm keine Spur mehr gehört; das wird
//! ausschließlich aus `Animator::advance` gemeldet.

use super::pose::{CardPose, CardTransform};
use super::threshold::SwipeDirection;
use crate::shared::options::{SPRING_DAMPING_RATIO, SPRING_INITIAL_VELOCITY};
use glam::Vec2;

/// Exponent der Hüllkurve bei t = 1 (e^-6.5 ≈ 0.0015 Restauslenkung).
const SPRING_SETTLE_EXPONENT: f32 = 6.5;

/// Verlaufskurve eines Übergangs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Langsamer Start und langsames Ende
    EaseInOut,
    /// Gedämpfte Feder (Sprungantwort), erreicht das Ziel exakt am Ende der Dauer
    Spring {
        /// Dämpfungsverhältnis (< 1 schwingt über)
        damping_ratio: f32,
        /// Anfangsgeschwindigkeit in Zielstrecken pro Dauer
        initial_velocity: f32,
    },
}

impl Easing {
    /// Feder mit den Standardwerten der Karte.
    pub fn spring() -> Self {
        Easing::Spring {
            damping_ratio: SPRING_DAMPING_RATIO,
            initial_velocity: SPRING_INITIAL_VELOCITY,
        }
    }

    /// Fortschritt für die normierte Zeit `t` (0 = Start, 1 = Ende).
    ///
    /// Liefert für `t >= 1` exakt 1.0. Federn dürfen zwischendurch über 1 hinausschießen.
    pub fn progress(self, t: f32) -> f32 {
        if t.is_nan() || t >= 1.0 {
            return 1.0;
        }
        if t <= 0.0 {
            return 0.0;
        }
        match self {
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
            Easing::Spring {
                damping_ratio,
                initial_velocity,
            } => spring_step(t, damping_ratio, initial_velocity),
        }
    }
}

fn spring_step(t: f32, damping_ratio: f32, initial_velocity: f32) -> f32 {
    let zeta = damping_ratio.clamp(0.05, 1.0);
    let omega = SPRING_SETTLE_EXPONENT / zeta;
    let envelope = (-zeta * omega * t).exp();

    if zeta >= 1.0 {
        // kritisch gedämpft
        return 1.0 - envelope * (1.0 + (omega - initial_velocity) * t);
    }

    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let phase = omega_d * t;
    1.0 - envelope
        * (phase.cos() + ((zeta * omega - initial_velocity) / omega_d) * phase.sin())
}

/// Art eines Übergangs; wird in der Abschlussmeldung zurückgegeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Einflug von außerhalb in die Ruhepose
    Entrance,
    /// Alpha-Blende beim Drag-Start
    DragFade,
    /// Rückfedern in die Ruhepose
    SnapBack,
    /// Wegwischen aus dem Bildschirm
    Dismiss(SwipeDirection),
}

/// Laufende Nummer eines gestarteten Übergangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

/// Animierbare Eigenschaft einer Pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatedProperty {
    /// Mittelpunkt
    Center,
    /// Rotation und Skalierung
    Transform,
    /// Deckkraft
    Alpha,
}

/// Zielwerte eines Übergangs; `None` lässt die Eigenschaft unberührt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionTarget {
    /// Ziel-Mittelpunkt
    pub center: Option<Vec2>,
    /// Ziel-Transform
    pub transform: Option<CardTransform>,
    /// Ziel-Alpha
    pub alpha: Option<f32>,
}

impl TransitionTarget {
    /// Alle drei Eigenschaften auf die Werte von `pose`.
    pub fn pose(pose: &CardPose) -> Self {
        Self {
            center: Some(pose.center),
            transform: Some(pose.transform),
            alpha: Some(pose.alpha),
        }
    }

    /// Setzt den Ziel-Mittelpunkt.
    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = Some(center);
        self
    }

    /// Setzt das Ziel-Alpha.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }
}

/// Abschlussmeldung eines Übergangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionFinished {
    /// Nummer des Übergangs
    pub id: TransitionId,
    /// Art des Übergangs
    pub kind: TransitionKind,
    /// `false`, wenn eine Spur vor dem Ende von einem späteren Schreiber übernommen wurde
    pub finished: bool,
}

trait Interpolate: Copy {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec2 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for CardTransform {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

#[derive(Debug, Clone, Copy)]
struct Track<T> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    owner: TransitionId,
}

impl<T: Interpolate> Track<T> {
    /// Schreitet um `dt` voran. Liefert den neuen Wert und ob die Spur fertig ist.
    fn step(&mut self, dt: f32) -> (T, bool) {
        self.elapsed += dt;
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return (self.to, true);
        }
        let t = self.elapsed / self.duration;
        (self.from.interpolate(self.to, self.easing.progress(t)), false)
    }
}

#[derive(Debug, Clone, Copy)]
struct RunningTransition {
    id: TransitionId,
    kind: TransitionKind,
    interrupted: bool,
}

/// Verwaltet die Spuren einer Karte.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    next_id: u64,
    center: Option<Track<Vec2>>,
    transform: Option<Track<CardTransform>>,
    alpha: Option<Track<f32>>,
    running: Vec<RunningTransition>,
}

impl Animator {
    /// Erstellt einen Animator ohne laufende Übergänge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet einen Übergang von `from` zu `target` und kehrt sofort zurück.
    ///
    /// Laufende Spuren der betroffenen Eigenschaften werden ersetzt.
    pub fn start(
        &mut self,
        kind: TransitionKind,
        from: &CardPose,
        target: TransitionTarget,
        duration: f32,
        easing: Easing,
    ) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;

        let duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };

        if let Some(to) = target.center {
            let previous = self.center.replace(Track {
                from: from.center,
                to,
                duration,
                elapsed: 0.0,
                easing,
                owner: id,
            });
            self.mark_interrupted(previous.map(|t| t.owner));
        }
        if let Some(to) = target.transform {
            let previous = self.transform.replace(Track {
                from: from.transform,
                to,
                duration,
                elapsed: 0.0,
                easing,
                owner: id,
            });
            self.mark_interrupted(previous.map(|t| t.owner));
        }
        if let Some(to) = target.alpha {
            let previous = self.alpha.replace(Track {
                from: from.alpha,
                to,
                duration,
                elapsed: 0.0,
                easing,
                owner: id,
            });
            self.mark_interrupted(previous.map(|t| t.owner));
        }

        self.running.push(RunningTransition {
            id,
            kind,
            interrupted: false,
        });
        id
    }

    /// Bricht die Spur einer Eigenschaft ab, weil sie direkt gesetzt wird.
    pub fn interrupt(&mut self, property: AnimatedProperty) {
        let owner = match property {
            AnimatedProperty::Center => self.center.take().map(|t| t.owner),
            AnimatedProperty::Transform => self.transform.take().map(|t| t.owner),
            AnimatedProperty::Alpha => self.alpha.take().map(|t| t.owner),
        };
        self.mark_interrupted(owner);
    }

    fn mark_interrupted(&mut self, owner: Option<TransitionId>) {
        let Some(owner) = owner else {
            return;
        };
        if let Some(running) = self.running.iter_mut().find(|r| r.id == owner) {
            running.interrupted = true;
        }
    }

    /// Schreitet alle Spuren um `dt` Sekunden voran, schreibt die Werte in
    /// `pose` und meldet abgeschlossene Übergänge in Startreihenfolge.
    pub fn advance(&mut self, pose: &mut CardPose, dt: f32) -> Vec<TransitionFinished> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if let Some(track) = self.center.as_mut() {
            let (value, done) = track.step(dt);
            pose.center = value;
            if done {
                self.center = None;
            }
        }
        if let Some(track) = self.transform.as_mut() {
            let (value, done) = track.step(dt);
            pose.transform = value;
            if done {
                self.transform = None;
            }
        }
        if let Some(track) = self.alpha.as_mut() {
            let (value, done) = track.step(dt);
            // Federn schwingen über, Alpha bleibt in [0, 1]
            pose.alpha = value.clamp(0.0, 1.0);
            if done {
                self.alpha = None;
            }
        }

        let owners = [
            self.center.map(|t| t.owner),
            self.transform.map(|t| t.owner),
            self.alpha.map(|t| t.owner),
        ];

        let mut finished = Vec::new();
        self.running.retain(|running| {
            let still_owns = owners.contains(&Some(running.id));
            if !still_owns {
                finished.push(TransitionFinished {
                    id: running.id,
                    kind: running.kind,
                    finished: !running.interrupted,
                });
            }
            still_owns
        });
        finished
    }

    /// `true`, solange mindestens ein Übergang nicht gemeldet wurde.
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// `true`, wenn ein Übergang dieser Art noch läuft.
    pub fn is_running(&self, kind: TransitionKind) -> bool {
        self.running.iter().any(|r| r.kind == kind)
    }
}
