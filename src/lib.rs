//! Swipe Card View Library.
//! Wischbare Karten (Tinder-Stil) als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DeckHost, UiState};
pub use core::{
    Card, CardContent, CardObserver, CardPhase, CardPose, CardStage, CardTransform, DragSample,
    RecipeRecord, SwipeDirection,
};
pub use shared::CardOptions;
