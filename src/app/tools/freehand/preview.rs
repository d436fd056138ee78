//! Reine Vorschau-Geometrie für eine Cursor-Position.

use super::state::FreehandSession;
use crate::core::{LatLng, MapView, Polyline};

/// Was bei der aktuellen Cursor-Position sichtbar sein soll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreehandPreview {
    /// Gestrichelte Linie vom letzten Punkt zum Cursor
    pub segment: Option<[LatLng; 2]>,
    /// Gestrichelte Anschlusslinie vom Ende der bestehenden Linie
    pub connection: Option<[LatLng; 2]>,
    /// Startpunkt, falls der Cursor im Schließen-Radius liegt
    pub close_indicator: Option<LatLng>,
}

impl FreehandSession {
    /// Berechnet die Vorschau für `cursor`.
    ///
    /// `existing` ist die bereits gespeicherte Linie der Session-Karte; an
    /// deren Ende wird die neue Zeichnung angehängt.
    pub fn preview(
        &self,
        cursor: LatLng,
        existing: Option<&Polyline>,
        view: &MapView,
        threshold_px: f64,
    ) -> FreehandPreview {
        let connection = existing.map(|line| {
            let to = self.points.first().copied().unwrap_or(cursor);
            [line.last(), to]
        });

        let close_indicator = self
            .is_near_start(cursor, view, threshold_px)
            .then(|| self.points[0]);

        let segment = self.points.last().map(|&last| [last, cursor]);

        FreehandPreview {
            segment,
            connection,
            close_indicator,
        }
    }
}
