//! Gemeinsame Helfer für die Controller-Flow-Tests.

mod drawing;
mod fragment;
mod sync_and_clipboard;

use city_zoom::{AppEffect, AppIntent, HeadlessSession, LatLng, MapSlot};
use glam::DVec2;

/// Farbe fertiger Linien (ohne Kontur).
pub const LINE_COLOR: &str = "#0088ff";

/// Sitzung mit geladener Seite und 800×600-Viewports.
pub fn loaded(url: &str) -> HeadlessSession {
    let mut session = HeadlessSession::new();
    session.load(url).expect("Seite sollte laden");
    for slot in MapSlot::ALL {
        dispatch(
            &mut session,
            AppIntent::MapResized {
                slot,
                size: DVec2::new(800.0, 600.0),
            },
        );
    }
    session
}

pub fn dispatch(session: &mut HeadlessSession, intent: AppIntent) -> Vec<AppEffect> {
    session
        .dispatch(intent)
        .expect("Intent sollte ohne Fehler durchlaufen")
}

/// Container-Pixel → Koordinate auf der aktuellen Ansicht.
pub fn at(session: &HeadlessSession, slot: MapSlot, x: f64, y: f64) -> LatLng {
    session
        .state
        .view
        .map(slot)
        .container_point_to_lat_lng(DVec2::new(x, y))
}

pub fn click_px(session: &mut HeadlessSession, slot: MapSlot, x: f64, y: f64) -> Vec<AppEffect> {
    let point = at(session, slot, x, y);
    dispatch(session, AppIntent::MapClicked { slot, point })
}

/// Sichtbare fertige Linien einer Karte (Vorschauen sind gestrichelt).
pub fn solid_lines(session: &HeadlessSession, slot: MapSlot) -> Vec<Vec<LatLng>> {
    session
        .host
        .solid_polylines(slot, LINE_COLOR)
        .map(<[LatLng]>::to_vec)
        .collect()
}
