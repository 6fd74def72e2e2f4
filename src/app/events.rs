//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::shared::CardOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: Vec2 },
    /// Ein Frame ist vergangen (`dt` in Sekunden)
    FrameAdvanced { dt: f32 },
    /// Primär-Drag begonnen (Position des Drucks, bisherige Verschiebung)
    DragStarted { pointer_pos: Vec2, translation: Vec2 },
    /// Drag bewegt (kumulierte Verschiebung seit dem Druck)
    DragMoved { translation: Vec2 },
    /// Drag losgelassen
    DragReleased { translation: Vec2, velocity: Vec2 },
    /// Drag von außen abgebrochen (Fokusverlust o.ä.)
    DragCancelled { translation: Vec2, velocity: Vec2 },
    /// Klick ohne Drag auf den Viewport
    CardTapped { pointer_pos: Vec2 },
    /// Detail-Fenster schließen
    DetailsClosed,
    /// Neue Karte oben auflegen
    DealRequested,
    /// Optionen-Dialog öffnen
    OptionsRequested,
    /// Optionen-Dialog schließen
    OptionsClosed,
    /// Optionen übernehmen (aus dem Dialog)
    OptionsApplied { options: Box<CardOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    OptionsReset,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands, die der Controller ausführt.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Viewport-Größe setzen und an die Karten weitergeben
    SetViewportSize { size: Vec2 },
    /// Animationen aller Karten voranschreiten lassen
    AdvanceAnimations { dt: f32 },
    /// Stapel bis zur Zielanzahl auffüllen
    RefillStage,
    /// Drag auf der obersten Karte beginnen
    BeginDrag { translation: Vec2 },
    /// Drag der obersten Karte aktualisieren
    UpdateDrag { translation: Vec2 },
    /// Drag der obersten Karte beenden
    EndDrag {
        translation: Vec2,
        velocity: Vec2,
        cancelled: bool,
    },
    /// „Weiterlesen“ der obersten Karte auslösen
    TapReadMore,
    /// Detail-Fenster schließen
    CloseDetails,
    /// Neue Karte oben auflegen
    DealCard,
    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<CardOptions> },
    /// Optionen zurücksetzen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
