//! Freihand-Tool: Polylinie per Klick auf einer der beiden Karten zeichnen.
//!
//! Das Tool hält nur Daten (Punkte, Vorschau-Layer-Handles) und liefert reine
//! Entscheidungen und Vorschau-Geometrie. Effekte erzeugt
//! `use_cases::drawing`.

mod preview;
mod state;

pub use preview::FreehandPreview;
pub use state::{ClickAction, FreehandSession, PreviewLayers};
