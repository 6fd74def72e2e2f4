//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die `core`, `app` und `ui` gleichermaßen lesen.

pub mod options;

pub use options::CardOptions;
