//! Geografischer Punkt und Koordinaten-Rundung.

use serde::{Deserialize, Serialize};

/// Anzahl Nachkommastellen für persistierte Koordinaten (~11 m).
pub const COORD_PRECISION: i32 = 4;

/// Skalierungsfaktor zu `COORD_PRECISION`.
const COORD_SCALE: f64 = 10_000.0;

/// Rundet eine Koordinate auf 4 Nachkommastellen.
///
/// Halbe Schritte runden Richtung +∞ (wie `Math.round` im Browser), damit
/// bestehende Fragmente beim Neu-Kodieren bitgleich bleiben. Idempotent:
/// `round_coord(round_coord(x)) == round_coord(x)`.
pub fn round_coord(value: f64) -> f64 {
    (value * COORD_SCALE + 0.5).floor() / COORD_SCALE
}

/// Geografischer Punkt in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt einen neuen Punkt.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt den auf `COORD_PRECISION` gerundeten Punkt zurück.
    pub fn rounded(self) -> Self {
        Self::new(round_coord(self.lat), round_coord(self.lng))
    }

    /// Beide Komponenten sind endliche Zahlen.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}
