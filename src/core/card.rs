//! Wischbare Karte: Pose, Drag-Verfolgung, Schwellenprüfung und Animationen.
//!
//! Lebenszyklus: `Entering` → `Idle` ↔ `Dragging` → (`Returning` → `Idle`)
//! oder (`Dismissing` → `Detached`). Aus `Detached` gibt es keinen Weg zurück.

use super::animation::{AnimatedProperty, Animator, Easing, TransitionFinished};
use super::animation::{TransitionKind, TransitionTarget};
use super::content::{CardContent, RecipeRecord};
use super::entrance::EntrancePlan;
use super::gesture::{DragPhase, DragSample, DragTracker};
use super::jitter::JitterSource;
use super::observer::CardObserver;
use super::pose::{CardPose, CardTransform};
use super::threshold::{evaluate_release, SwipeDecision, SwipeDirection, SwipeLimits};
use crate::shared::CardOptions;
use glam::Vec2;
use std::f32::consts::PI;
use std::rc::{Rc, Weak};

/// Zusätzliche Rotation pro Einheit horizontalem Drag-Verhältnis (π/10).
pub const DRAG_ROTATION_PER_RATIO: f32 = PI / 10.0;
/// Horizontales Ziel beim Wegwischen als Vielfaches der Bildschirmbreite.
pub const DISMISS_DISTANCE_FACTOR: f32 = 1.6;
/// Größe der „Weiterlesen“-Fläche in der rechten unteren Kartenecke.
pub const READ_MORE_SIZE: Vec2 = Vec2::new(110.0, 36.0);

/// Lebenszyklus-Phase einer Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Einflug-Animation läuft
    Entering,
    /// In Ruhepose, wartet auf einen Drag
    Idle,
    /// Drag aktiv
    Dragging,
    /// Federt in die Ruhepose zurück
    Returning,
    /// Fliegt aus dem Bildschirm
    Dismissing,
    /// Aus dem Host entfernt (Endzustand)
    Detached,
}

/// Aktion, die beim Antippen von „Weiterlesen“ ausgeführt wird.
pub type ReadMoreAction = Box<dyn FnMut(&Card)>;

/// Eine einzelne wischbare Karte.
pub struct Card {
    index: usize,
    screen: Vec2,
    options: CardOptions,
    pose: CardPose,
    resting: CardPose,
    tracker: DragTracker,
    animator: Animator,
    phase: CardPhase,
    content: CardContent,
    observer: Option<Weak<dyn CardObserver>>,
    read_more_action: Option<ReadMoreAction>,
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("index", &self.index)
            .field("phase", &self.phase)
            .field("pose", &self.pose)
            .field("resting", &self.resting)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl Card {
    /// Erstellt eine Karte außerhalb des Bildschirms und startet den Einflug.
    ///
    /// `options` wird kopiert; `screen` ist die Größe des Host-Bereichs.
    pub fn new(options: &CardOptions, screen: Vec2, jitter: &mut impl JitterSource) -> Self {
        let plan = EntrancePlan::roll(screen, options, jitter);
        let mut card = Self {
            index: 0,
            screen,
            options: options.clone(),
            pose: plan.start,
            resting: plan.resting,
            tracker: DragTracker::default(),
            animator: Animator::new(),
            phase: CardPhase::Entering,
            content: CardContent::default(),
            observer: None,
            read_more_action: None,
        };
        card.animator.start(
            TransitionKind::Entrance,
            &card.pose,
            TransitionTarget::pose(&plan.resting),
            card.options.duration_of_initialize,
            Easing::EaseInOut,
        );
        card
    }

    // ── Host-Anbindung ──────────────────────────────────────────

    /// Bindet einen Datensatz an die Anzeigefelder.
    pub fn bind_content(&mut self, record: &RecipeRecord) {
        self.content = CardContent::from_record(record);
    }

    /// Registriert den Beobachter (nur schwach gehalten).
    pub fn set_observer<O: CardObserver + 'static>(&mut self, observer: &Rc<O>) {
        let weak: Weak<dyn CardObserver> = Rc::downgrade(observer) as Weak<O>;
        self.observer = Some(weak);
    }

    /// Entfernt den Beobachter.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Setzt die Aktion für „Weiterlesen“.
    pub fn set_read_more_action(&mut self, action: impl FnMut(&Card) + 'static) {
        self.read_more_action = Some(Box::new(action));
    }

    /// Führt die „Weiterlesen“-Aktion aus. `false`, wenn keine gesetzt ist.
    pub fn tap_read_more(&mut self) -> bool {
        let Some(mut action) = self.read_more_action.take() else {
            return false;
        };
        action(self);
        if self.read_more_action.is_none() {
            self.read_more_action = Some(action);
        }
        true
    }

    /// Vergibt die Kennung (durch den Host).
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Aktualisiert die Bildschirmgröße für die Verhältnisberechnung.
    /// Die Ruhepose bleibt unverändert.
    pub fn set_screen_size(&mut self, screen: Vec2) {
        self.screen = screen;
    }

    // ── Gesten ──────────────────────────────────────────────────

    /// Verarbeitet ein Drag-Sample.
    pub fn handle_drag(&mut self, sample: DragSample) {
        let sample = sample.sanitized();
        match sample.phase {
            DragPhase::Began => self.begin_drag(sample.translation),
            DragPhase::Changed => self.update_drag(sample.translation),
            DragPhase::Ended | DragPhase::Cancelled => self.end_drag(sample.velocity),
        }
    }

    /// `true`, wenn ein neuer Drag beginnen darf.
    pub fn accepts_drag(&self) -> bool {
        !matches!(self.phase, CardPhase::Dismissing | CardPhase::Detached)
    }

    fn begin_drag(&mut self, translation: Vec2) {
        if !self.accepts_drag() {
            log::debug!(
                "Karte {}: Drag-Beginn in Phase {:?} ignoriert",
                self.index,
                self.phase
            );
            return;
        }

        self.tracker.begin(self.pose.center, translation);
        self.phase = CardPhase::Dragging;
        self.notify(|observer, card| observer.on_drag_began(card));

        self.animator.start(
            TransitionKind::DragFade,
            &self.pose,
            TransitionTarget::default().with_alpha(self.options.start_dragging_alpha),
            self.options.duration_of_start_dragging,
            Easing::EaseInOut,
        );
    }

    fn update_drag(&mut self, translation: Vec2) {
        if self.phase != CardPhase::Dragging {
            return;
        }

        let center = self.tracker.update(translation, self.screen);
        self.animator.interrupt(AnimatedProperty::Center);
        self.pose.center = center;
        self.notify(|observer, card| observer.on_position_changed(card, center.x, center.y));

        // Neigung hängt nur vom horizontalen Verhältnis ab
        let rotation = self.resting.transform.rotation
            + DRAG_ROTATION_PER_RATIO * self.tracker.ratio.x;
        self.animator.interrupt(AnimatedProperty::Transform);
        self.pose.transform = CardTransform::new(rotation, self.options.max_scale_of_dragging);
    }

    fn end_drag(&mut self, velocity: Vec2) {
        if self.phase != CardPhase::Dragging {
            return;
        }

        let limits = SwipeLimits::from_options(&self.options);
        match evaluate_release(self.tracker.ratio, limits) {
            SwipeDecision::Dismiss(direction) => self.move_off_screen(direction, velocity),
            SwipeDecision::Restore => self.move_to_resting(),
        }

        self.tracker.reset();
    }

    // ── Übergänge ───────────────────────────────────────────────

    fn move_to_resting(&mut self) {
        self.phase = CardPhase::Returning;
        self.animator.start(
            TransitionKind::SnapBack,
            &self.pose,
            TransitionTarget::pose(&self.resting).with_alpha(self.options.stop_dragging_alpha),
            self.options.duration_of_return_original,
            Easing::spring(),
        );
        self.notify(|observer, card| observer.on_returned_to_original(card));
    }

    fn move_off_screen(&mut self, direction: SwipeDirection, velocity: Vec2) {
        // Vertikales Ziel ist der Wert der Loslass-Geschwindigkeit (Punkte/s als Position)
        let target = Vec2::new(
            direction.sign() * DISMISS_DISTANCE_FACTOR * self.screen.x,
            velocity.y,
        );
        log::debug!(
            "Karte {}: wird nach {:?} weggewischt (Ziel {:?})",
            self.index,
            direction,
            target
        );

        self.phase = CardPhase::Dismissing;
        self.animator.start(
            TransitionKind::Dismiss(direction),
            &self.pose,
            TransitionTarget::default()
                .with_center(target)
                .with_alpha(self.options.stop_dragging_alpha),
            self.options.duration_of_swipe_out,
            Easing::spring(),
        );
    }

    /// Schreitet alle laufenden Animationen um `dt` Sekunden voran und
    /// verarbeitet deren Abschluss.
    pub fn advance(&mut self, dt: f32) {
        if self.phase == CardPhase::Detached {
            return;
        }
        for report in self.animator.advance(&mut self.pose, dt) {
            self.on_transition_finished(report);
        }
    }

    fn on_transition_finished(&mut self, report: TransitionFinished) {
        match report.kind {
            TransitionKind::Entrance if self.phase == CardPhase::Entering => {
                self.phase = CardPhase::Idle;
                log::debug!("Karte {}: Einflug abgeschlossen", self.index);
            }
            TransitionKind::SnapBack if self.phase == CardPhase::Returning => {
                self.phase = CardPhase::Idle;
            }
            TransitionKind::Dismiss(direction) => self.finish_dismiss(direction),
            _ => {}
        }
    }

    fn finish_dismiss(&mut self, direction: SwipeDirection) {
        if self.phase == CardPhase::Detached {
            return;
        }
        match direction {
            SwipeDirection::Left => self.notify(|observer, card| observer.on_swiped_left(card)),
            SwipeDirection::Right => self.notify(|observer, card| observer.on_swiped_right(card)),
        }
        self.detach();
    }

    /// Entfernt die Karte aus dem Host. Nur der erste Aufruf wirkt.
    fn detach(&mut self) -> bool {
        if self.phase == CardPhase::Detached {
            return false;
        }
        self.phase = CardPhase::Detached;
        self.animator = Animator::new();
        self.read_more_action = None;
        log::info!("Karte {} entfernt", self.index);
        true
    }

    fn notify(&self, f: impl FnOnce(&dyn CardObserver, &Card)) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            f(observer.as_ref(), self);
        }
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Vom Host vergebene Kennung.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Aktuelle Pose.
    pub fn pose(&self) -> &CardPose {
        &self.pose
    }

    /// Ruhepose (fest für die gesamte Lebensdauer).
    pub fn resting_pose(&self) -> &CardPose {
        &self.resting
    }

    /// Scratch-Zustand des laufenden Drags.
    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    /// Gebundene Anzeigefelder.
    pub fn content(&self) -> &CardContent {
        &self.content
    }

    /// Kopie der Optionen, mit denen die Karte erstellt wurde.
    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Bildschirmgröße für die Verhältnisberechnung.
    pub fn screen_size(&self) -> Vec2 {
        self.screen
    }

    /// `true` nach dem Entfernen.
    pub fn is_detached(&self) -> bool {
        self.phase == CardPhase::Detached
    }

    /// `true`, solange eine Animation läuft.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Prüft, ob ein Host-Punkt auf der Karte liegt.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pose.contains(self.options.card_size(), point)
    }

    /// Prüft, ob ein Host-Punkt auf der „Weiterlesen“-Fläche liegt.
    pub fn read_more_contains(&self, point: Vec2) -> bool {
        if !self.contains_point(point) {
            return false;
        }
        let local = self.pose.affine().inverse().transform_point2(point);
        let corner = self.options.card_size() * 0.5;
        local.x >= corner.x - READ_MORE_SIZE.x && local.y >= corner.y - READ_MORE_SIZE.y
    }
}

#[cfg(test)]
mod tests;
