use super::*;
use city_zoom::{encode_fragment, AnnotationSet, Polyline};

fn example_set() -> AnnotationSet {
    AnnotationSet::from_lines(
        Polyline::new(vec![LatLng::new(42.0, -83.0), LatLng::new(42.1, -83.1)]),
        None,
    )
}

#[test]
fn test_page_load_renders_fragment_lines() {
    let fragment = encode_fragment(&example_set()).expect("Fragment erwartet");
    let session = loaded(&format!("https://example.org/?zoom=12#{fragment}"));

    assert_eq!(session.state.annotations.lines, example_set());
    assert_eq!(
        solid_lines(&session, MapSlot::One),
        vec![vec![LatLng::new(42.0, -83.0), LatLng::new(42.1, -83.1)]]
    );
    assert!(session.host.clear_visible[0]);
    assert!(!session.host.clear_visible[1]);
    assert!(session.host.notifications.is_empty());
    assert_eq!(session.host.views[0].zoom, 12);
}

#[test]
fn test_page_load_reads_legacy_csv_fragment() {
    let session = loaded("https://example.org/#2=42,-83,42.1,-83.1");

    assert!(session.state.annotations.lines.get(MapSlot::One).is_none());
    assert_eq!(
        session
            .state
            .annotations
            .lines
            .get(MapSlot::Two)
            .map(|line| line.points().to_vec()),
        Some(vec![LatLng::new(42.0, -83.0), LatLng::new(42.1, -83.1)])
    );
}

#[test]
fn test_unreadable_fragment_notifies_once() {
    let session = loaded("https://example.org/#kaputt!");

    assert_eq!(session.host.notifications, vec!["Invalid map annotations"]);
    assert!(session.state.annotations.lines.is_empty());
}

#[test]
fn test_hash_change_replaces_lines() {
    let mut session = loaded("https://example.org/");
    let fragment = encode_fragment(&example_set()).expect("Fragment erwartet");

    dispatch(&mut session, AppIntent::FragmentChanged { fragment });
    assert_eq!(session.state.annotations.lines, example_set());

    dispatch(
        &mut session,
        AppIntent::FragmentChanged {
            fragment: String::new(),
        },
    );
    assert!(session.state.annotations.lines.is_empty());
    assert!(session.host.layers_on(MapSlot::One).is_empty());
    assert!(!session.host.clear_visible[0]);
}

#[test]
fn test_own_fragment_echo_is_not_reparsed() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 100.0);
    click_px(&mut session, MapSlot::One, 250.0, 250.0);
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });

    let own = session
        .state
        .annotations
        .known_fragment
        .clone()
        .expect("Eigenes Fragment erwartet");
    let effects = dispatch(&mut session, AppIntent::FragmentChanged { fragment: own });

    assert!(effects.is_empty(), "Echo erzeugt keine Effekte: {effects:?}");
}
