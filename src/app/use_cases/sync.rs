//! Use-Cases für die Synchronisation beider Karten und den Query-String.

use super::clipboard;
use crate::app::effects::AppEffect;
use crate::app::timers::TimerId;
use crate::app::AppState;
use crate::core::{LatLng, MapSlot};
use glam::DVec2;

/// Aktualisiert die Viewport-Größe einer Karte.
pub fn resize(state: &mut AppState, slot: MapSlot, size: DVec2) {
    state.view.map_mut(slot).viewport_size = size;
}

/// Vermerkt den Zoom einer Karte, ohne ihn zu übertragen.
pub fn record_zoom(state: &mut AppState, slot: MapSlot, zoom: i32) {
    let zoom = state.options.clamp_zoom(zoom);
    state.view.map_mut(slot).zoom = zoom;
}

/// Überträgt den Zoom von `source` auf beide Karten und sperrt kurz.
///
/// Während der Sperre wird nur der Zoom von `source` vermerkt; so lösen die
/// eigenen `SetMapZoom`-Effekte keine Endlosschleife aus.
pub fn sync_zoom(state: &mut AppState, source: MapSlot, zoom: i32) {
    if state.view.zoom_guard.is_active() {
        record_zoom(state, source, zoom);
        return;
    }

    let zoom = state.options.clamp_zoom(zoom);
    let AppState {
        view,
        effects,
        options,
        ..
    } = state;
    view.zoom_guard.arm(effects, options.zoom_sync_debounce_ms);
    for slot in MapSlot::ALL {
        view.map_mut(slot).zoom = zoom;
        effects.emit(AppEffect::SetMapZoom { slot, zoom });
    }
    log::debug!("Zoom {} von {} auf beide Karten übertragen", zoom, source);
}

/// Gibt die Zoom-Sperre frei, wenn `timer` der aktuelle Sperr-Timer ist.
pub fn release_zoom_guard(state: &mut AppState, timer: TimerId) {
    if state.view.zoom_guard.finish(timer) {
        log::debug!("Zoom-Sperre aufgehoben");
    }
}

/// Vermerkt das Zentrum einer Karte.
pub fn record_center(state: &mut AppState, slot: MapSlot, center: LatLng) {
    if !center.is_finite() {
        log::warn!("Ungültiges Zentrum für {} ignoriert", slot);
        return;
    }
    state.view.map_mut(slot).center = center;
}

/// Schreibt Zoom und Zentren in den Query-String (Fragment bleibt).
pub fn write_view_params(state: &mut AppState) {
    let Some(page) = state.page.as_ref() else {
        log::debug!("Query nicht geschrieben: keine Seite geladen");
        return;
    };
    let query = state.view.params().to_query_string();
    let next = page.with_query(&query);
    state.effects.emit(AppEffect::ReplaceQuery {
        url: next.href().to_string(),
    });
    state.page = Some(next);

    clipboard::dismiss_copied(state);
}

/// Zentriert eine Karte auf ein Suchergebnis.
pub fn center_on_location(state: &mut AppState, slot: MapSlot, location: LatLng) {
    if !location.is_finite() {
        log::warn!("Suchergebnis ohne gültige Koordinaten ignoriert");
        return;
    }
    let zoom = state.options.clamp_zoom(state.options.search_result_zoom);
    let map = state.view.map_mut(slot);
    map.center = location;
    map.zoom = zoom;
    state.effects.emit(AppEffect::SetView {
        slot,
        center: location,
        zoom,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::PageUrl;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.page = Some(PageUrl::parse("https://example.org/#frag").expect("URL erwartet"));
        state
    }

    #[test]
    fn sync_zoom_sets_both_maps_and_arms_guard() {
        let mut state = loaded_state();
        sync_zoom(&mut state, MapSlot::Two, 15);

        assert_eq!(state.view.map(MapSlot::One).zoom, 15);
        assert_eq!(state.view.map(MapSlot::Two).zoom, 15);
        assert!(state.view.zoom_guard.is_active());

        let effects = state.effects.drain();
        assert!(matches!(
            effects[0],
            AppEffect::ScheduleTimer { delay_ms: 100, .. }
        ));
        assert_eq!(
            effects[1..],
            [
                AppEffect::SetMapZoom {
                    slot: MapSlot::One,
                    zoom: 15
                },
                AppEffect::SetMapZoom {
                    slot: MapSlot::Two,
                    zoom: 15
                },
            ]
        );
    }

    #[test]
    fn sync_zoom_while_guarded_only_records() {
        let mut state = loaded_state();
        sync_zoom(&mut state, MapSlot::One, 15);
        state.effects.drain();

        sync_zoom(&mut state, MapSlot::Two, 9);

        assert!(state.effects.is_empty());
        assert_eq!(state.view.map(MapSlot::One).zoom, 15);
        assert_eq!(state.view.map(MapSlot::Two).zoom, 9);
    }

    #[test]
    fn write_view_params_keeps_fragment() {
        let mut state = loaded_state();
        record_center(&mut state, MapSlot::One, LatLng::new(40.0, -74.0));

        write_view_params(&mut state);

        assert_eq!(
            state.effects.drain(),
            vec![AppEffect::ReplaceQuery {
                url: "https://example.org/?zoom=13&lat1=40.00000&lon1=-74.00000&lat2=42.33140&lon2=-83.04580#frag"
                    .to_string()
            }]
        );
    }

    #[test]
    fn center_on_location_uses_search_zoom() {
        let mut state = loaded_state();
        record_zoom(&mut state, MapSlot::Two, 5);

        center_on_location(&mut state, MapSlot::Two, LatLng::new(48.1372, 11.5756));

        assert_eq!(state.view.map(MapSlot::Two).zoom, 13);
        assert_eq!(
            state.effects.drain(),
            vec![AppEffect::SetView {
                slot: MapSlot::Two,
                center: LatLng::new(48.1372, 11.5756),
                zoom: 13
            }]
        );
    }
}
