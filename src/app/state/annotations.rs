//! Gespeicherte Linien, ihre Layer und das zuletzt bekannte Fragment.

use crate::app::effects::StrokeLayers;
use crate::core::{AnnotationSet, MapSlot};

/// Annotations-Zustand beider Karten.
#[derive(Debug, Clone, Default)]
pub struct AnnotationState {
    /// Linien (Quelle für das Fragment)
    pub lines: AnnotationSet,
    /// Gerenderte Layer je Karte
    pub rendered: [Option<StrokeLayers>; 2],
    /// Fragment-Text, der zuletzt geschrieben oder gelesen wurde
    pub known_fragment: Option<String>,
}

impl AnnotationState {
    /// Erstellt einen leeren Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer einer Karte (veränderbar).
    pub fn rendered_mut(&mut self, slot: MapSlot) -> &mut Option<StrokeLayers> {
        &mut self.rendered[slot.index()]
    }
}
