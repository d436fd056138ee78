//! Zustand einer laufenden Zeichen-Session.

use crate::app::effects::{LayerId, StrokeLayers};
use crate::core::{LatLng, MapSlot, MapView, Polyline};

/// Ergebnis eines Klicks in die Zeichen-Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Punkt anhängen und weiterzeichnen
    AddPoint,
    /// Startpunkt wiederholen und Session abschließen
    CloseLoop,
}

/// Handles der Vorschau-Layer einer Session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewLayers {
    /// Durchgezogener Pfad der bisher gesetzten Punkte (ab 2 Punkten)
    pub path: Option<StrokeLayers>,
    /// Gestrichelt: letzter Punkt → Cursor
    pub segment: Option<StrokeLayers>,
    /// Gestrichelt: Ende der bestehenden Linie → Session-Start
    pub connection: Option<StrokeLayers>,
    /// Kreis am Startpunkt, solange der Cursor im Schließen-Radius ist
    pub close_indicator: Option<LayerId>,
}

/// Laufende Zeichen-Session (systemweit höchstens eine).
#[derive(Debug, Clone, PartialEq)]
pub struct FreehandSession {
    /// Karte, auf der gezeichnet wird
    pub slot: MapSlot,
    /// Bisher gesetzte Punkte
    pub points: Vec<LatLng>,
    /// Vorschau-Layer
    pub layers: PreviewLayers,
    /// Cursor liegt im Schließen-Radius
    pub within_close_range: bool,
}

impl FreehandSession {
    /// Startet eine leere Session.
    pub fn new(slot: MapSlot) -> Self {
        Self {
            slot,
            points: Vec::new(),
            layers: PreviewLayers::default(),
            within_close_range: false,
        }
    }

    /// Prüft, ob `cursor` nah genug am Startpunkt liegt, um zu schließen.
    ///
    /// Erst ab zwei Punkten; gemessen in Screen-Pixeln der Karte `view`.
    pub fn is_near_start(&self, cursor: LatLng, view: &MapView, threshold_px: f64) -> bool {
        if self.points.len() < 2 {
            return false;
        }
        view.pixel_distance(self.points[0], cursor) <= threshold_px
    }

    /// Entscheidet, was ein Klick an `cursor` bewirkt.
    pub fn classify_click(&self, cursor: LatLng, view: &MapView, threshold_px: f64) -> ClickAction {
        if self.is_near_start(cursor, view, threshold_px) {
            ClickAction::CloseLoop
        } else {
            ClickAction::AddPoint
        }
    }

    /// Hängt eine Kopie des Startpunkts an (Schleife schließen).
    pub fn close_loop(&mut self) {
        if let Some(&first) = self.points.first() {
            self.points.push(first);
        }
    }

    /// Vereinigt bestehende Linie und Session-Punkte.
    ///
    /// `None`, wenn zusammen weniger als zwei Punkte vorliegen.
    pub fn combined_with(&self, existing: Option<&Polyline>) -> Option<Polyline> {
        match existing {
            Some(line) => Some(line.extended(&self.points)),
            None => Polyline::new(self.points.clone()),
        }
    }
}
