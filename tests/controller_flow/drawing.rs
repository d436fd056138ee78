use super::*;
use city_zoom::{decode_fragment, PageUrl};

fn fragment_lines(session: &HeadlessSession) -> city_zoom::AnnotationSet {
    let page = PageUrl::parse(&session.host.url).expect("Host-URL sollte gültig sein");
    decode_fragment(page.fragment()).annotations
}

#[test]
fn test_close_loop_click_completes_polyline() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 150.0);
    click_px(&mut session, MapSlot::One, 200.0, 180.0);

    // Knapp 5 px neben dem Startpunkt
    click_px(&mut session, MapSlot::One, 105.0, 150.0);

    assert!(session.state.draw.is_none());
    assert_eq!(session.host.draw_mode, None);

    let line = session
        .state
        .annotations
        .lines
        .get(MapSlot::One)
        .expect("Linie 1 erwartet");
    assert_eq!(line.len(), 3);
    assert_eq!(line.points()[0], line.points()[2]);

    let decoded = fragment_lines(&session);
    let stored = decoded.get(MapSlot::One).expect("Linie im Fragment erwartet");
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.points()[0], stored.points()[2]);
    assert!(decoded.get(MapSlot::Two).is_none());
}

#[test]
fn test_click_far_from_start_keeps_drawing() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 150.0);
    click_px(&mut session, MapSlot::One, 200.0, 180.0);
    click_px(&mut session, MapSlot::One, 300.0, 300.0);

    let session_points = session
        .state
        .draw
        .as_ref()
        .map(|draw| draw.points.len())
        .expect("Session sollte weiterlaufen");
    assert_eq!(session_points, 3);
    assert!(session.state.annotations.lines.is_empty());
    assert_eq!(session.host.draw_mode, Some(MapSlot::One));
}

#[test]
fn test_redraw_appends_to_existing_line() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::Two });
    click_px(&mut session, MapSlot::Two, 100.0, 100.0);
    click_px(&mut session, MapSlot::Two, 200.0, 100.0);
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::Two });

    let old = session
        .state
        .annotations
        .lines
        .get(MapSlot::Two)
        .expect("Linie 2 erwartet")
        .clone();

    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::Two });
    let third = at(&session, MapSlot::Two, 300.0, 200.0);
    let fourth = at(&session, MapSlot::Two, 400.0, 300.0);
    dispatch(
        &mut session,
        AppIntent::MapClicked {
            slot: MapSlot::Two,
            point: third,
        },
    );
    dispatch(
        &mut session,
        AppIntent::MapClicked {
            slot: MapSlot::Two,
            point: fourth,
        },
    );
    dispatch(&mut session, AppIntent::MapDoubleClicked { slot: MapSlot::Two });

    let merged = session
        .state
        .annotations
        .lines
        .get(MapSlot::Two)
        .expect("Linie 2 erwartet");
    let mut expected = old.points().to_vec();
    expected.extend([third, fourth]);
    assert_eq!(merged.points(), expected.as_slice());

    // Nur eine fertige Linie sichtbar, keine Vorschau übrig
    assert_eq!(solid_lines(&session, MapSlot::Two), vec![expected]);
    assert_eq!(session.host.layers_on(MapSlot::Two).len(), 2);
}

#[test]
fn test_draw_on_other_map_terminates_first_session() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 100.0);
    click_px(&mut session, MapSlot::One, 200.0, 200.0);

    let effects = dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::Two });

    let modes: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            AppEffect::SetDrawMode { active } => Some(*active),
            _ => None,
        })
        .collect();
    assert_eq!(modes, vec![None, Some(MapSlot::Two)]);
    assert!(session.state.annotations.lines.get(MapSlot::One).is_some());
    assert_eq!(session.state.drawing_slot(), Some(MapSlot::Two));
    assert_eq!(session.host.draw_mode, Some(MapSlot::Two));
}

#[test]
fn test_escape_finishes_instead_of_cancelling() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 100.0);
    click_px(&mut session, MapSlot::One, 150.0, 220.0);

    dispatch(&mut session, AppIntent::EscapePressed);

    assert!(session.state.draw.is_none());
    assert_eq!(
        session
            .state
            .annotations
            .lines
            .get(MapSlot::One)
            .map(|line| line.len()),
        Some(2)
    );
}

#[test]
fn test_single_point_session_is_discarded() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 100.0);
    dispatch(&mut session, AppIntent::MapDoubleClicked { slot: MapSlot::One });

    assert!(session.state.draw.is_none());
    assert!(session.state.annotations.lines.is_empty());
    assert!(session.host.layers_on(MapSlot::One).is_empty());
    assert!(!session.host.url.contains('#'));
}

#[test]
fn test_preview_follows_cursor_and_shows_close_indicator() {
    let mut session = loaded("https://example.org/");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 150.0);
    click_px(&mut session, MapSlot::One, 200.0, 180.0);

    let near = at(&session, MapSlot::One, 103.0, 151.0);
    dispatch(
        &mut session,
        AppIntent::PointerMoved {
            slot: MapSlot::One,
            point: near,
        },
    );
    assert!(session.host.close_range[0]);
    let circles = session
        .host
        .layers_on(MapSlot::One)
        .values()
        .filter(|layer| matches!(layer, city_zoom::host::HeadlessLayer::Circle { .. }))
        .count();
    assert_eq!(circles, 1);

    let far = at(&session, MapSlot::One, 400.0, 400.0);
    dispatch(
        &mut session,
        AppIntent::PointerMoved {
            slot: MapSlot::One,
            point: far,
        },
    );
    assert!(!session.host.close_range[0]);

    dispatch(&mut session, AppIntent::PointerLeft { slot: MapSlot::One });
    // Nur der Pfad (Kontur + Linie) bleibt
    assert_eq!(session.host.layers_on(MapSlot::One).len(), 2);
}

#[test]
fn test_clear_removes_line_and_fragment() {
    let mut session = loaded("https://example.org/?zoom=13");
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 100.0, 100.0);
    click_px(&mut session, MapSlot::One, 200.0, 200.0);
    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    assert!(session.host.clear_visible[0]);

    dispatch(&mut session, AppIntent::ClearButtonPressed { slot: MapSlot::One });

    assert!(session.state.annotations.lines.is_empty());
    assert!(session.host.layers_on(MapSlot::One).is_empty());
    assert!(!session.host.clear_visible[0]);
    assert_eq!(session.host.url, "https://example.org/?zoom=13");
}

#[test]
fn test_live_previews_are_created_once_then_updated_in_place() {
    let mut session = loaded("https://example.org/#1=42.9634,-85.6681,42.97,-85.67");
    assert_eq!(solid_lines(&session, MapSlot::One).len(), 1);

    dispatch(&mut session, AppIntent::DrawButtonPressed { slot: MapSlot::One });
    click_px(&mut session, MapSlot::One, 300.0, 300.0);

    let mut per_move = Vec::new();
    for (x, y) in [(350.0, 320.0), (380.0, 340.0), (410.0, 360.0)] {
        let point = at(&session, MapSlot::One, x, y);
        let effects = dispatch(
            &mut session,
            AppIntent::PointerMoved {
                slot: MapSlot::One,
                point,
            },
        );
        let added = effects
            .iter()
            .filter(|e| matches!(e, AppEffect::AddPolyline { .. }))
            .count();
        let updated = effects
            .iter()
            .filter(|e| matches!(e, AppEffect::SetPolylinePoints { .. }))
            .count();
        let removed = effects
            .iter()
            .filter(|e| matches!(e, AppEffect::RemoveLayer { .. }))
            .count();
        per_move.push((added, updated, removed));
    }

    // Segment und Anschluss je als Kontur + Linie
    assert_eq!(per_move, vec![(4, 0, 0), (0, 4, 0), (0, 4, 0)]);
    // Fertige Linie (2) + Segment (2) + Anschluss (2)
    assert_eq!(session.host.layers_on(MapSlot::One).len(), 6);
}
