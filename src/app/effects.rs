//! Effekte: Aufträge an den Host, die Handler während eines Commands sammeln.
//!
//! Handler mutieren nur den `AppState` und legen Effekte in die
//! [`EffectQueue`]. Der Controller leert die Queue nach jedem Intent.

use super::timers::TimerId;
use crate::core::{LatLng, MapSlot};
use crate::shared::{CircleStyle, StrokeStyle};
use serde::Serialize;

/// Handle eines vom Host gerenderten Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LayerId(pub u64);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Eine sichtbare Linie besteht aus weißer Kontur und farbiger Linie darüber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrokeLayers {
    /// Kontur (unten)
    pub border: LayerId,
    /// Linie (oben)
    pub line: LayerId,
}

/// Auftrag an den Host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum AppEffect {
    /// Karte auf Zentrum und Zoom setzen
    SetView {
        slot: MapSlot,
        center: LatLng,
        zoom: i32,
    },
    /// Nur den Zoom einer Karte setzen
    SetMapZoom { slot: MapSlot, zoom: i32 },
    /// Polylinie als neuen Layer anlegen
    AddPolyline {
        slot: MapSlot,
        layer: LayerId,
        points: Vec<LatLng>,
        style: StrokeStyle,
    },
    /// Punkte eines bestehenden Polylinien-Layers ersetzen
    SetPolylinePoints {
        slot: MapSlot,
        layer: LayerId,
        points: Vec<LatLng>,
    },
    /// Kreis-Marker mit Radius in Screen-Pixeln anlegen
    AddCircleMarker {
        slot: MapSlot,
        layer: LayerId,
        center: LatLng,
        radius_px: f64,
        style: CircleStyle,
    },
    /// Layer entfernen
    RemoveLayer { slot: MapSlot, layer: LayerId },
    /// Zeichenmodus (Button aktiv, Container-Cursor); `None` = kein Slot
    SetDrawMode { active: Option<MapSlot> },
    /// Hinweis „im Schließen-Radius" am Karten-Container
    SetCloseRange { slot: MapSlot, within: bool },
    /// Sichtbarkeit des Löschen-Buttons
    SetClearButtonVisible { slot: MapSlot, visible: bool },
    /// Beschriftung und Zustand des Kopier-Buttons
    SetCopyButton { label: String, copied: bool },
    /// Aktuellen History-Eintrag durch URL mit neuem Query ersetzen
    ReplaceQuery { url: String },
    /// Aktuelle URL durch URL mit neuem Fragment ersetzen
    ReplaceFragment { url: String },
    /// Kurzer Hinweis (Toast)
    Notify { text: String },
    /// Text in die Zwischenablage schreiben
    WriteClipboard { text: String },
    /// URL zum manuellen Kopieren anzeigen
    ShowManualCopy { url: String },
    /// Timer starten
    ScheduleTimer { timer: TimerId, delay_ms: u64 },
    /// Timer abbrechen
    CancelTimer { timer: TimerId },
}

/// Sammelt Effekte und vergibt Layer- und Timer-Handles.
#[derive(Debug, Default)]
pub struct EffectQueue {
    outbox: Vec<AppEffect>,
    next_layer: u64,
    next_timer: u64,
}

impl EffectQueue {
    /// Erstellt eine leere Queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht einen Effekt ein.
    pub fn emit(&mut self, effect: AppEffect) {
        self.outbox.push(effect);
    }

    /// Vergibt ein neues Layer-Handle.
    pub fn new_layer(&mut self) -> LayerId {
        self.next_layer += 1;
        LayerId(self.next_layer)
    }

    /// Vergibt ein neues Timer-Handle.
    pub fn new_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    /// Anzahl wartender Effekte.
    pub fn len(&self) -> usize {
        self.outbox.len()
    }

    /// Gibt `true` zurück, wenn keine Effekte warten.
    pub fn is_empty(&self) -> bool {
        self.outbox.is_empty()
    }

    /// Entnimmt alle wartenden Effekte in Reihenfolge.
    pub fn drain(&mut self) -> Vec<AppEffect> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_monotonic_and_distinct() {
        let mut queue = EffectQueue::new();
        let a = queue.new_layer();
        let b = queue.new_layer();
        assert!(b > a);
        assert_eq!(queue.new_timer(), TimerId(1));
        assert_eq!(queue.new_timer(), TimerId(2));
    }

    #[test]
    fn test_drain_empties_in_order() {
        let mut queue = EffectQueue::new();
        queue.emit(AppEffect::SetDrawMode { active: None });
        queue.emit(AppEffect::Notify {
            text: "x".to_string(),
        });
        assert_eq!(queue.len(), 2);
        let drained = queue.drain();
        assert!(matches!(drained[0], AppEffect::SetDrawMode { active: None }));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_effect_serializes_with_tag() {
        let json = serde_json::to_string(&AppEffect::SetMapZoom {
            slot: MapSlot::Two,
            zoom: 12,
        })
        .expect("JSON erwartet");
        assert_eq!(json, r#"{"effect":"set_map_zoom","slot":"Two","zoom":12}"#);
    }
}
