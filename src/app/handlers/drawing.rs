//! Handler für Freihand-Zeichnen und Löschen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LatLng, MapSlot};

/// Startet das Zeichnen auf einer Karte.
pub fn start(state: &mut AppState, slot: MapSlot) {
    use_cases::drawing::start_draw(state, slot);
}

/// Schließt das Zeichnen ab und übernimmt die Linie.
pub fn finish(state: &mut AppState, slot: MapSlot) {
    use_cases::drawing::finish_draw(state, slot);
}

/// Hängt einen Punkt an.
pub fn add_point(state: &mut AppState, slot: MapSlot, point: LatLng) {
    use_cases::drawing::add_point(state, slot, point);
}

/// Wiederholt den Startpunkt.
pub fn close_loop(state: &mut AppState, slot: MapSlot) {
    use_cases::drawing::close_loop(state, slot);
}

/// Aktualisiert die Cursor-Vorschau.
pub fn update_preview(state: &mut AppState, slot: MapSlot, cursor: LatLng) {
    use_cases::drawing::update_preview(state, slot, cursor);
}

/// Entfernt die Cursor-Vorschau.
pub fn clear_preview(state: &mut AppState, slot: MapSlot) {
    use_cases::drawing::clear_preview(state, slot);
}

/// Löscht die Linie einer Karte.
pub fn clear_line(state: &mut AppState, slot: MapSlot) {
    use_cases::drawing::clear_line(state, slot);
}
