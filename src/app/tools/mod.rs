//! Zeichen-Werkzeuge.
//!
//! Tools erzeugen reine Daten (Entscheidungen, Vorschau-Geometrie); die
//! Mutation des `AppState` und die Effekte entstehen zentral in den
//! Use-Cases.

/// Freihand-Polylinie mit Schließen am Startpunkt.
pub mod freehand;

pub use freehand::{ClickAction, FreehandPreview, FreehandSession, PreviewLayers};
