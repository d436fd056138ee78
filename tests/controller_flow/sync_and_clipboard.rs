use super::*;

fn count_queries(effects: &[AppEffect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, AppEffect::ReplaceQuery { .. }))
        .count()
}

fn zoom(session: &mut HeadlessSession, slot: MapSlot, level: i32) -> Vec<AppEffect> {
    session.host.views[slot.index()].zoom = level;
    dispatch(session, AppIntent::ZoomEnded { slot, zoom: level })
}

#[test]
fn test_zoom_syncs_both_maps_without_echo_loop() {
    let mut session = loaded("https://example.org/#abc");

    let effects = zoom(&mut session, MapSlot::One, 15);

    assert_eq!(session.host.views[0].zoom, 15);
    assert_eq!(session.host.views[1].zoom, 15);
    assert_eq!(session.state.view.map(MapSlot::Two).zoom, 15);
    // Echo der zweiten Karte fällt in die Sperre und schreibt nichts
    assert_eq!(count_queries(&effects), 1);
    assert!(session.host.url.starts_with("https://example.org/?zoom=15&lat1="));
    assert!(session.host.url.ends_with("#abc"));
}

#[test]
fn test_zoom_guard_releases_after_debounce() {
    let mut session = loaded("https://example.org/");
    zoom(&mut session, MapSlot::One, 15);

    // Innerhalb der Sperre: nur vermerkt
    let guarded = zoom(&mut session, MapSlot::Two, 10);
    assert_eq!(count_queries(&guarded), 0);
    assert_eq!(session.host.views[0].zoom, 15);

    session.advance(100).expect("Timer sollten laufen");
    assert!(!session.state.view.zoom_guard.is_active());

    zoom(&mut session, MapSlot::Two, 11);
    assert_eq!(session.host.views[0].zoom, 11);
    assert!(session.host.url.contains("zoom=11"));
}

#[test]
fn test_pan_writes_five_decimal_centers() {
    let mut session = loaded("https://example.org/");
    session.host.views[1].center = LatLng::new(48.137_154, 11.576_124);
    dispatch(
        &mut session,
        AppIntent::MoveEnded {
            slot: MapSlot::Two,
            center: LatLng::new(48.137_154, 11.576_124),
        },
    );

    assert_eq!(
        session.host.url,
        "https://example.org/?zoom=13&lat1=42.96340&lon1=-85.66810&lat2=48.13715&lon2=11.57612"
    );
}

#[test]
fn test_query_defaults_and_clamping_on_load() {
    let session = loaded("https://example.org/?zoom=42&lat1=abc&lon1=1&lat2=10.5&lon2=20.25");

    assert_eq!(session.state.view.map(MapSlot::One).zoom, 19);
    assert_eq!(
        session.state.view.map(MapSlot::One).center,
        LatLng::new(42.9634, -85.6681)
    );
    assert_eq!(
        session.state.view.map(MapSlot::Two).center,
        LatLng::new(10.5, 20.25)
    );
}

#[test]
fn test_search_centers_map_at_search_zoom() {
    let mut session = loaded("https://example.org/?zoom=5");
    dispatch(
        &mut session,
        AppIntent::LocationFound {
            slot: MapSlot::One,
            location: LatLng::new(52.52, 13.405),
        },
    );

    assert_eq!(session.host.views[0].center, LatLng::new(52.52, 13.405));
    assert_eq!(session.host.views[0].zoom, 13);
    assert_eq!(session.host.views[1].zoom, 5);
}

#[test]
fn test_copy_url_flips_label_and_reverts() {
    let mut session = loaded("https://example.org/?zoom=13#abc");

    dispatch(&mut session, AppIntent::CopyUrlRequested);

    assert_eq!(
        session.host.clipboard.as_deref(),
        Some("https://example.org/?zoom=13#abc")
    );
    assert_eq!(session.host.copy_label, "Copied!");
    assert!(session.host.copied);

    session.advance(9_999).expect("Timer sollten laufen");
    assert!(session.host.copied);
    session.advance(1).expect("Timer sollten laufen");
    assert!(!session.host.copied);
    assert_eq!(session.host.copy_label, "Copy URL");
}

#[test]
fn test_view_change_dismisses_copied_state() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::CopyUrlRequested);
    assert!(session.host.copied);

    dispatch(
        &mut session,
        AppIntent::MoveEnded {
            slot: MapSlot::One,
            center: LatLng::new(40.0, -74.0),
        },
    );

    assert!(!session.host.copied);
    assert_eq!(session.host.pending_timers(), 0);
}

#[test]
fn test_denied_clipboard_offers_manual_copy() {
    let mut session = loaded("https://example.org/?zoom=13");
    session.host.clipboard_denied = true;

    dispatch(&mut session, AppIntent::CopyUrlRequested);

    assert_eq!(session.host.manual_copies, vec!["https://example.org/?zoom=13"]);
    assert!(!session.host.copied);
    assert_eq!(session.host.clipboard, None);
}

#[test]
fn test_stale_timer_is_ignored() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::CopyUrlRequested);

    let effects = dispatch(
        &mut session,
        AppIntent::TimerElapsed {
            timer: city_zoom::app::TimerId(9_999),
        },
    );

    assert!(effects.is_empty());
    assert!(session.host.copied);
}
