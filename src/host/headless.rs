//! Headless-Host: hält den sichtbaren Zustand im Speicher.
//!
//! Grundlage für Replay und Integrationstests. Timer laufen auf einer
//! virtuellen Uhr, Zoom-Änderungen erzeugen wie eine echte Karte ein
//! `ZoomEnded`-Echo.

use std::collections::BTreeMap;

use super::{Clipboard, MapSurface, Notifier, PageLocation, Scheduler};
use crate::app::{LayerId, TimerId};
use crate::core::{LatLng, MapSlot};
use crate::shared::{CircleStyle, StrokeStyle};

/// Ein gerenderter Layer.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessLayer {
    Polyline {
        points: Vec<LatLng>,
        style: StrokeStyle,
    },
    Circle {
        center: LatLng,
        radius_px: f64,
        style: CircleStyle,
    },
}

impl HeadlessLayer {
    /// Punkte einer Polylinie (leer für Kreise).
    pub fn points(&self) -> &[LatLng] {
        match self {
            HeadlessLayer::Polyline { points, .. } => points,
            HeadlessLayer::Circle { .. } => &[],
        }
    }
}

/// Ansicht einer Karte aus Host-Sicht.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostView {
    pub center: LatLng,
    pub zoom: i32,
}

/// In-Memory-Host für Replay und Tests.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    /// Ansicht je Karte
    pub views: [HostView; 2],
    /// Layer je Karte, nach Handle sortiert
    pub layers: [BTreeMap<LayerId, HeadlessLayer>; 2],
    pub draw_mode: Option<MapSlot>,
    pub close_range: [bool; 2],
    pub clear_visible: [bool; 2],
    pub copy_label: String,
    pub copied: bool,
    /// Aktuelle Adresszeile
    pub url: String,
    /// Anzahl ersetzter URLs (Query oder Fragment)
    pub url_replacements: usize,
    pub notifications: Vec<String>,
    pub manual_copies: Vec<String>,
    /// Inhalt der Zwischenablage
    pub clipboard: Option<String>,
    /// Zwischenablage verweigert Schreibzugriffe
    pub clipboard_denied: bool,
    pending_clipboard: Option<bool>,
    zoom_echoes: Vec<(MapSlot, i32)>,
    now_ms: u64,
    timers: BTreeMap<TimerId, u64>,
}

impl HeadlessHost {
    /// Erstellt einen leeren Host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtuelle Uhrzeit in Millisekunden.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Anzahl laufender Timer.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Entnimmt den nächsten Timer, der bis `until_ms` fällig wird.
    ///
    /// Die Uhr springt auf dessen Fälligkeit; gleichzeitige Timer laufen in
    /// Vergabe-Reihenfolge ab.
    pub fn pop_due_timer(&mut self, until_ms: u64) -> Option<TimerId> {
        let (&timer, &due) = self
            .timers
            .iter()
            .filter(|&(_, &due)| due <= until_ms)
            .min_by_key(|&(&timer, &due)| (due, timer))?;
        self.timers.remove(&timer);
        self.now_ms = self.now_ms.max(due);
        Some(timer)
    }

    /// Stellt die Uhr vor (nie zurück).
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Zoom-Echos seit dem letzten Aufruf.
    pub fn take_zoom_echoes(&mut self) -> Vec<(MapSlot, i32)> {
        std::mem::take(&mut self.zoom_echoes)
    }

    /// Ergebnis des letzten Schreibversuchs in die Zwischenablage.
    pub fn take_clipboard_outcome(&mut self) -> Option<bool> {
        self.pending_clipboard.take()
    }

    /// Layer einer Karte.
    pub fn layers_on(&self, slot: MapSlot) -> &BTreeMap<LayerId, HeadlessLayer> {
        &self.layers[slot.index()]
    }

    /// Durchgezogene Polylinien einer Karte mit gegebener Farbe.
    pub fn solid_polylines<'a>(
        &'a self,
        slot: MapSlot,
        color: &'a str,
    ) -> impl Iterator<Item = &'a [LatLng]> + 'a {
        self.layers_on(slot).values().filter_map(move |layer| match layer {
            HeadlessLayer::Polyline { points, style }
                if style.color == color && style.dash_array.is_none() =>
            {
                Some(points.as_slice())
            }
            _ => None,
        })
    }

    fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
        self.url_replacements += 1;
    }
}

impl MapSurface for HeadlessHost {
    fn set_view(&mut self, slot: MapSlot, center: LatLng, zoom: i32) {
        self.views[slot.index()] = HostView { center, zoom };
    }

    fn set_zoom(&mut self, slot: MapSlot, zoom: i32) {
        let view = &mut self.views[slot.index()];
        if view.zoom != zoom {
            view.zoom = zoom;
            self.zoom_echoes.push((slot, zoom));
        }
    }

    fn add_polyline(&mut self, slot: MapSlot, layer: LayerId, points: &[LatLng], style: &StrokeStyle) {
        self.layers[slot.index()].insert(
            layer,
            HeadlessLayer::Polyline {
                points: points.to_vec(),
                style: style.clone(),
            },
        );
    }

    fn set_polyline_points(&mut self, slot: MapSlot, layer: LayerId, points: &[LatLng]) {
        match self.layers[slot.index()].get_mut(&layer) {
            Some(HeadlessLayer::Polyline { points: current, .. }) => {
                *current = points.to_vec();
            }
            _ => log::warn!("{}: {} ist keine Polylinie", slot, layer),
        }
    }

    fn add_circle_marker(
        &mut self,
        slot: MapSlot,
        layer: LayerId,
        center: LatLng,
        radius_px: f64,
        style: &CircleStyle,
    ) {
        self.layers[slot.index()].insert(
            layer,
            HeadlessLayer::Circle {
                center,
                radius_px,
                style: style.clone(),
            },
        );
    }

    fn remove_layer(&mut self, slot: MapSlot, layer: LayerId) {
        if self.layers[slot.index()].remove(&layer).is_none() {
            log::warn!("{}: {} war nicht vorhanden", slot, layer);
        }
    }

    fn set_draw_mode(&mut self, active: Option<MapSlot>) {
        self.draw_mode = active;
    }

    fn set_close_range(&mut self, slot: MapSlot, within: bool) {
        self.close_range[slot.index()] = within;
    }

    fn set_clear_button_visible(&mut self, slot: MapSlot, visible: bool) {
        self.clear_visible[slot.index()] = visible;
    }

    fn set_copy_button(&mut self, label: &str, copied: bool) {
        self.copy_label = label.to_string();
        self.copied = copied;
    }
}

impl Notifier for HeadlessHost {
    fn notify(&mut self, text: &str) {
        self.notifications.push(text.to_string());
    }

    fn show_manual_copy(&mut self, url: &str) {
        self.manual_copies.push(url.to_string());
    }
}

impl Clipboard for HeadlessHost {
    fn write_text(&mut self, text: &str) {
        if self.clipboard_denied {
            self.pending_clipboard = Some(false);
        } else {
            self.clipboard = Some(text.to_string());
            self.pending_clipboard = Some(true);
        }
    }
}

impl PageLocation for HeadlessHost {
    fn replace_query(&mut self, url: &str) {
        self.set_url(url);
    }

    fn replace_fragment(&mut self, url: &str) {
        self.set_url(url);
    }
}

impl Scheduler for HeadlessHost {
    fn schedule(&mut self, timer: TimerId, delay_ms: u64) {
        self.timers.insert(timer, self.now_ms.saturating_add(delay_ms));
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.remove(&timer);
    }
}
