//! Zentrale Konfiguration der Karten-Ansicht.
//!
//! `CardOptions` enthält alle Zeit-, Alpha-, Skalierungs- und Stilwerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

// ── Animationen ─────────────────────────────────────────────────────

/// Dauer der Einflug-Animation in Sekunden.
pub const DURATION_OF_INITIALIZE: f32 = 0.93;
/// Dauer der Alpha-Blende beim Drag-Start in Sekunden.
pub const DURATION_OF_START_DRAGGING: f32 = 0.26;
/// Dauer der Rückfeder-Animation in Sekunden.
pub const DURATION_OF_RETURN_ORIGINAL: f32 = 0.26;
/// Dauer der Wegwisch-Animation in Sekunden.
pub const DURATION_OF_SWIPE_OUT: f32 = 0.48;
/// Dämpfungsverhältnis der Feder-Animationen (Rückfedern, Wegwischen).
pub const SPRING_DAMPING_RATIO: f32 = 0.68;
/// Normierte Anfangsgeschwindigkeit der Feder-Animationen.
pub const SPRING_INITIAL_VELOCITY: f32 = 0.0;

// ── Drag ────────────────────────────────────────────────────────────

/// Alpha während des Drags.
pub const START_DRAGGING_ALPHA: f32 = 0.72;
/// Alpha nach dem Loslassen (Ruhe-Alpha).
pub const STOP_DRAGGING_ALPHA: f32 = 1.0;
/// Skalierung während des Drags.
pub const MAX_SCALE_OF_DRAGGING: f32 = 0.97;
/// Horizontale Wegwisch-Schwelle als Anteil der Bildschirmbreite.
pub const SWIPE_X_POS_LIMIT_RATIO: f32 = 0.25;
/// Vertikale Wegwisch-Schwelle als Anteil der Bildschirmhöhe.
pub const SWIPE_Y_POS_LIMIT_RATIO: f32 = 0.05;

// ── Einflug ─────────────────────────────────────────────────────────

/// Skalierung vor dem Einflug.
pub const BEFORE_INITIALIZE_SCALE: f32 = 1.0;
/// Skalierung nach dem Einflug (Ruhepose).
pub const AFTER_INITIALIZE_SCALE: f32 = 1.0;

// ── Stil ────────────────────────────────────────────────────────────

/// Kartenbreite in Punkten.
pub const CARD_WIDTH: f32 = 300.0;
/// Kartenhöhe in Punkten.
pub const CARD_HEIGHT: f32 = 320.0;
/// Hintergrundfarbe der Karte (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Rahmenfarbe der Karte (RGBA: Hellgrau, #dddddd).
pub const BORDER_COLOR: [f32; 4] = [0.867, 0.867, 0.867, 1.0];
/// Rahmenbreite in Punkten.
pub const BORDER_WIDTH: f32 = 0.75;
/// Eckenradius in Punkten.
pub const CORNER_RADIUS: f32 = 6.0;
/// Schatten-Radius in Punkten.
pub const SHADOW_RADIUS: f32 = 3.0;
/// Schatten-Deckkraft.
pub const SHADOW_OPACITY: f32 = 0.5;
/// Schatten-Versatz in Punkten.
pub const SHADOW_OFFSET: [f32; 2] = [0.75, 1.75];

/// Alle Konstanten einer Karte. Die Karte übernimmt bei der Erstellung eine
/// Kopie und verändert sie nie.
/// Wird als `swipe_card_view.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardOptions {
    // ── Animationen ─────────────────────────────────────────────
    /// Dauer der Einflug-Animation (s)
    pub duration_of_initialize: f32,
    /// Dauer der Alpha-Blende beim Drag-Start (s)
    pub duration_of_start_dragging: f32,
    /// Dauer des Rückfederns in die Ruhepose (s)
    pub duration_of_return_original: f32,
    /// Dauer des Wegwischens (s)
    pub duration_of_swipe_out: f32,

    // ── Drag ────────────────────────────────────────────────────
    /// Alpha während des Drags
    pub start_dragging_alpha: f32,
    /// Alpha nach dem Loslassen
    pub stop_dragging_alpha: f32,
    /// Skalierung während des Drags
    pub max_scale_of_dragging: f32,
    /// Horizontale Schwelle (Anteil der Bildschirmbreite, 0..1)
    pub swipe_x_pos_limit_ratio: f32,
    /// Vertikale Schwelle (Anteil der Bildschirmhöhe, 0..1)
    pub swipe_y_pos_limit_ratio: f32,

    // ── Einflug ─────────────────────────────────────────────────
    /// Skalierung vor dem Einflug
    pub before_initialize_scale: f32,
    /// Skalierung nach dem Einflug
    pub after_initialize_scale: f32,

    // ── Stil ────────────────────────────────────────────────────
    /// Kartenbreite
    pub card_width: f32,
    /// Kartenhöhe
    pub card_height: f32,
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
    /// Rahmenfarbe (RGBA), auch Schattenfarbe
    pub border_color: [f32; 4],
    /// Rahmenbreite
    pub border_width: f32,
    /// Eckenradius
    pub corner_radius: f32,
    /// Schatten-Radius
    pub shadow_radius: f32,
    /// Schatten-Deckkraft
    pub shadow_opacity: f32,
    /// Schatten-Versatz
    pub shadow_offset: [f32; 2],
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            duration_of_initialize: DURATION_OF_INITIALIZE,
            duration_of_start_dragging: DURATION_OF_START_DRAGGING,
            duration_of_return_original: DURATION_OF_RETURN_ORIGINAL,
            duration_of_swipe_out: DURATION_OF_SWIPE_OUT,

            start_dragging_alpha: START_DRAGGING_ALPHA,
            stop_dragging_alpha: STOP_DRAGGING_ALPHA,
            max_scale_of_dragging: MAX_SCALE_OF_DRAGGING,
            swipe_x_pos_limit_ratio: SWIPE_X_POS_LIMIT_RATIO,
            swipe_y_pos_limit_ratio: SWIPE_Y_POS_LIMIT_RATIO,

            before_initialize_scale: BEFORE_INITIALIZE_SCALE,
            after_initialize_scale: AFTER_INITIALIZE_SCALE,

            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            background_color: BACKGROUND_COLOR,
            border_color: BORDER_COLOR,
            border_width: BORDER_WIDTH,
            corner_radius: CORNER_RADIUS,
            shadow_radius: SHADOW_RADIUS,
            shadow_opacity: SHADOW_OPACITY,
            shadow_offset: SHADOW_OFFSET,
        }
    }
}

impl CardOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                return Self::default();
            }
        };

        match Self::from_toml(&content) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("swipe_card_view"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("swipe_card_view.toml")
    }

    /// Prüft alle Werte auf gültige Bereiche.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("duration_of_initialize", self.duration_of_initialize),
            ("duration_of_start_dragging", self.duration_of_start_dragging),
            ("duration_of_return_original", self.duration_of_return_original),
            ("duration_of_swipe_out", self.duration_of_swipe_out),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{name} muss endlich und >= 0 sein (ist {value})"
            );
        }

        for (name, value) in [
            ("start_dragging_alpha", self.start_dragging_alpha),
            ("stop_dragging_alpha", self.stop_dragging_alpha),
            ("shadow_opacity", self.shadow_opacity),
        ] {
            ensure!(
                (0.0..=1.0).contains(&value),
                "{name} muss in [0, 1] liegen (ist {value})"
            );
        }

        for (name, value) in [
            ("swipe_x_pos_limit_ratio", self.swipe_x_pos_limit_ratio),
            ("swipe_y_pos_limit_ratio", self.swipe_y_pos_limit_ratio),
        ] {
            if !(value > 0.0 && value < 1.0) {
                bail!("{name} muss in (0, 1) liegen (ist {value})");
            }
        }

        for (name, value) in [
            ("max_scale_of_dragging", self.max_scale_of_dragging),
            ("before_initialize_scale", self.before_initialize_scale),
            ("after_initialize_scale", self.after_initialize_scale),
            ("card_width", self.card_width),
            ("card_height", self.card_height),
        ] {
            ensure!(
                value.is_finite() && value > 0.0,
                "{name} muss endlich und > 0 sein (ist {value})"
            );
        }

        Ok(())
    }

    /// Kartengröße als Vektor.
    pub fn card_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.card_width, self.card_height)
    }
}
