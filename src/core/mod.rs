//! Core-Domänentypen: Karte, Pose, Gesten, Schwellen, Animationen.

pub mod animation;
/// Wischbare Karte
///
/// Dieses Modul setzt die Einzelteile zusammen:
/// - Pose (Mittelpunkt, Transform, Alpha)
/// - Drag-Verfolgung und Schwellenprüfung
/// - Übergänge (Einflug, Rückfedern, Wegwischen)
pub mod card;
pub mod content;
pub mod entrance;
pub mod gesture;
pub mod jitter;
pub mod observer;
pub mod pose;
pub mod stage;
pub mod threshold;

pub use animation::{Animator, Easing, TransitionFinished, TransitionKind, TransitionTarget};
pub use card::{Card, CardPhase};
pub use content::{CardContent, CardImage, RecipeRecord};
pub use entrance::EntrancePlan;
pub use gesture::{drag_ratio, DragPhase, DragSample, DragTracker};
pub use jitter::{JitterSource, RandomJitter, ScriptedJitter};
pub use observer::CardObserver;
pub use pose::{CardPose, CardTransform};
pub use stage::CardStage;
pub use threshold::{evaluate_release, SwipeDecision, SwipeDirection, SwipeLimits};
