//! Annotations-Datenmodell: Karten-Slots, Polylinien und das Slot-Paar.

use super::LatLng;
use serde::{Deserialize, Serialize};

/// Mindestanzahl Punkte, ab der eine Linie existiert.
pub const MIN_POLYLINE_POINTS: usize = 2;

/// Einer der beiden Karten-Bereiche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapSlot {
    /// Linke Karte (`map1`)
    One,
    /// Rechte Karte (`map2`)
    Two,
}

impl MapSlot {
    /// Beide Slots in fester Reihenfolge.
    pub const ALL: [MapSlot; 2] = [MapSlot::One, MapSlot::Two];

    /// Wire-ID des Slots (`1` oder `2`), wie in URL-Parametern verwendet.
    pub fn id(self) -> u8 {
        match self {
            MapSlot::One => 1,
            MapSlot::Two => 2,
        }
    }

    /// Slot aus Wire-ID.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(MapSlot::One),
            2 => Some(MapSlot::Two),
            _ => None,
        }
    }

    /// Index für Arrays mit zwei Einträgen.
    pub fn index(self) -> usize {
        match self {
            MapSlot::One => 0,
            MapSlot::Two => 1,
        }
    }
}

impl std::fmt::Display for MapSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "map{}", self.id())
    }
}

/// Offene Polylinie mit mindestens zwei Punkten.
///
/// Die Invariante wird im Konstruktor geprüft; eine `Polyline` mit weniger
/// Punkten existiert nicht.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    points: Vec<LatLng>,
}

impl Polyline {
    /// Erstellt eine Linie, oder `None` bei weniger als zwei Punkten.
    pub fn new(points: Vec<LatLng>) -> Option<Self> {
        if points.len() >= MIN_POLYLINE_POINTS {
            Some(Self { points })
        } else {
            None
        }
    }

    /// Punkte in Zeichenreihenfolge.
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`; vorhanden für API-Symmetrie.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Letzter Punkt (Anschluss für Verlängerungen).
    pub fn last(&self) -> LatLng {
        self.points[self.points.len() - 1]
    }

    /// Hängt Punkte an und gibt die verlängerte Linie zurück.
    pub fn extended(&self, more: &[LatLng]) -> Self {
        let mut points = Vec::with_capacity(self.points.len() + more.len());
        points.extend_from_slice(&self.points);
        points.extend_from_slice(more);
        Self { points }
    }
}

/// Annotationen beider Karten; jeder Slot optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnotationSet {
    /// Linie auf Karte 1
    pub line1: Option<Polyline>,
    /// Linie auf Karte 2
    pub line2: Option<Polyline>,
}

impl AnnotationSet {
    /// Leeres Set (keine Linien).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set aus zwei optionalen Linien.
    pub fn from_lines(line1: Option<Polyline>, line2: Option<Polyline>) -> Self {
        Self { line1, line2 }
    }

    /// Linie eines Slots.
    pub fn get(&self, slot: MapSlot) -> Option<&Polyline> {
        match slot {
            MapSlot::One => self.line1.as_ref(),
            MapSlot::Two => self.line2.as_ref(),
        }
    }

    /// Setzt (oder entfernt) die Linie eines Slots.
    pub fn set(&mut self, slot: MapSlot, line: Option<Polyline>) {
        match slot {
            MapSlot::One => self.line1 = line,
            MapSlot::Two => self.line2 = line,
        }
    }

    /// Entfernt die Linie eines Slots und gibt sie zurück.
    pub fn take(&mut self, slot: MapSlot) -> Option<Polyline> {
        match slot {
            MapSlot::One => self.line1.take(),
            MapSlot::Two => self.line2.take(),
        }
    }

    /// Keine der beiden Linien vorhanden.
    pub fn is_empty(&self) -> bool {
        self.line1.is_none() && self.line2.is_none()
    }
}
