//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `location` und `host`
//! gemeinsam lesen.

pub mod options;

pub use options::{CircleStyle, StrokeStyle, ViewerOptions};
pub use options::{CLOSE_POINT_PX, INVALID_FRAGMENT_MESSAGE};
