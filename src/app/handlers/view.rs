//! Handler für Ansicht, Zoom-Synchronisation und Query-String.

use crate::app::timers::TimerId;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LatLng, MapSlot};
use glam::DVec2;

/// Aktualisiert die Viewport-Größe einer Karte.
pub fn set_viewport_size(state: &mut AppState, slot: MapSlot, size: DVec2) {
    use_cases::sync::resize(state, slot, size);
}

/// Überträgt einen Zoom auf beide Karten.
pub fn sync_zoom(state: &mut AppState, source: MapSlot, zoom: i32) {
    use_cases::sync::sync_zoom(state, source, zoom);
}

/// Vermerkt einen Zoom ohne Übertragung.
pub fn record_zoom(state: &mut AppState, slot: MapSlot, zoom: i32) {
    use_cases::sync::record_zoom(state, slot, zoom);
}

/// Vermerkt ein Kartenzentrum.
pub fn record_center(state: &mut AppState, slot: MapSlot, center: LatLng) {
    use_cases::sync::record_center(state, slot, center);
}

/// Schreibt die Ansichts-Parameter in den Query-String.
pub fn write_view_params(state: &mut AppState) {
    use_cases::sync::write_view_params(state);
}

/// Zentriert auf ein Suchergebnis.
pub fn center_on_location(state: &mut AppState, slot: MapSlot, location: LatLng) {
    use_cases::sync::center_on_location(state, slot, location);
}

pub fn release_zoom_guard(state: &mut AppState, timer: TimerId) {
    use_cases::sync::release_zoom_guard(state, timer);
}
