//! Use-Cases für das Freihand-Zeichnen.
//!
//! Eine Session sammelt Punkte auf genau einer Karte. Abschließen hängt die
//! Punkte an die bestehende Linie dieser Karte an und schreibt das Fragment.
//! Abschließen ist nie ein Abbruch: weniger als zwei Punkte werden verworfen.

use super::fragment::{line_styles, set_line, sync_clear_buttons, write_fragment};
use super::layers::{drop_stroke, upsert_stroke, StrokePair};
use crate::app::effects::{AppEffect, EffectQueue};
use crate::app::tools::FreehandSession;
use crate::app::AppState;
use crate::core::{LatLng, MapSlot};
use crate::shared::CircleStyle;

/// Startet eine Session auf `slot`.
///
/// Läuft bereits eine Session auf der anderen Karte, wird sie zuerst
/// abgeschlossen. Auf derselben Karte passiert nichts.
pub fn start_draw(state: &mut AppState, slot: MapSlot) {
    match state.drawing_slot() {
        Some(active) if active == slot => return,
        Some(active) => finish_draw(state, active),
        None => {}
    }

    state.draw = Some(FreehandSession::new(slot));
    state
        .effects
        .emit(AppEffect::SetDrawMode { active: Some(slot) });
    log::debug!("Zeichnen auf {} gestartet", slot);
}

/// Entfernt alle Vorschau-Layer einer Session.
fn remove_previews(queue: &mut EffectQueue, session: &mut FreehandSession) {
    let slot = session.slot;
    drop_stroke(queue, slot, &mut session.layers.path);
    remove_live_previews(queue, session);
}

/// Entfernt die cursorabhängigen Vorschauen (Segment, Anschluss, Kreis).
fn remove_live_previews(queue: &mut EffectQueue, session: &mut FreehandSession) {
    let slot = session.slot;
    drop_stroke(queue, slot, &mut session.layers.segment);
    drop_stroke(queue, slot, &mut session.layers.connection);
    hide_close_indicator(queue, session);
}

/// Zeigt den Kreis am Startpunkt (einmal angelegt, danach unverändert).
fn show_close_indicator(
    queue: &mut EffectQueue,
    session: &mut FreehandSession,
    center: LatLng,
    radius_px: f64,
    style: &CircleStyle,
) {
    let slot = session.slot;
    if session.layers.close_indicator.is_none() {
        let layer = queue.new_layer();
        queue.emit(AppEffect::AddCircleMarker {
            slot,
            layer,
            center,
            radius_px,
            style: style.clone(),
        });
        session.layers.close_indicator = Some(layer);
    }
    set_within_range(queue, session, true);
}

fn hide_close_indicator(queue: &mut EffectQueue, session: &mut FreehandSession) {
    let slot = session.slot;
    if let Some(layer) = session.layers.close_indicator.take() {
        queue.emit(AppEffect::RemoveLayer { slot, layer });
    }
    set_within_range(queue, session, false);
}

/// Meldet das Bereichs-Flag nur bei Änderung.
fn set_within_range(queue: &mut EffectQueue, session: &mut FreehandSession, within: bool) {
    if session.within_close_range != within {
        session.within_close_range = within;
        queue.emit(AppEffect::SetCloseRange {
            slot: session.slot,
            within,
        });
    }
}

/// Schließt die Session auf `slot` ab und übernimmt die Linie.
pub fn finish_draw(state: &mut AppState, slot: MapSlot) {
    if state.drawing_slot() != Some(slot) {
        return;
    }
    let Some(mut session) = state.draw.take() else {
        return;
    };

    remove_previews(&mut state.effects, &mut session);
    state.effects.emit(AppEffect::SetDrawMode { active: None });

    match session.combined_with(state.annotations.lines.get(slot)) {
        Some(line) => {
            log::debug!("Linie auf {} übernommen ({} Punkte)", slot, line.len());
            set_line(state, slot, Some(line));
            write_fragment(state);
            sync_clear_buttons(state);
        }
        None => log::debug!("Zeichnung auf {} verworfen (zu wenige Punkte)", slot),
    }
}

/// Bricht eine laufende Session ohne Übernahme ab.
pub fn cancel_draw(state: &mut AppState) {
    let Some(mut session) = state.draw.take() else {
        return;
    };
    remove_previews(&mut state.effects, &mut session);
    state.effects.emit(AppEffect::SetDrawMode { active: None });
    log::debug!("Zeichnen auf {} abgebrochen", session.slot);
}

/// Hängt einen Punkt an und aktualisiert den Pfad.
pub fn add_point(state: &mut AppState, slot: MapSlot, point: LatLng) {
    let AppState {
        draw,
        effects,
        options,
        ..
    } = state;
    let Some(session) = draw.as_mut().filter(|s| s.slot == slot) else {
        return;
    };

    session.points.push(point);
    if session.points.len() >= 2 {
        upsert_stroke(
            effects,
            slot,
            &mut session.layers.path,
            &session.points,
            line_styles(options),
        );
    }
}

/// Wiederholt den Startpunkt als letzten Punkt.
pub fn close_loop(state: &mut AppState, slot: MapSlot) {
    if let Some(session) = state.draw.as_mut().filter(|s| s.slot == slot) {
        session.close_loop();
    }
}

/// Aktualisiert die cursorabhängigen Vorschauen.
pub fn update_preview(state: &mut AppState, slot: MapSlot, cursor: LatLng) {
    let AppState {
        draw,
        effects,
        options,
        annotations,
        view,
        ..
    } = state;
    let Some(session) = draw.as_mut().filter(|s| s.slot == slot) else {
        return;
    };

    let preview = session.preview(
        cursor,
        annotations.lines.get(slot),
        view.map(slot),
        options.close_point_px,
    );
    let dashed_line = options.preview_line_style();
    let dashed_border = options.preview_border_style();
    let styles = StrokePair {
        line: &dashed_line,
        border: &dashed_border,
    };

    match preview.connection {
        Some(points) => {
            upsert_stroke(effects, slot, &mut session.layers.connection, &points, styles)
        }
        None => drop_stroke(effects, slot, &mut session.layers.connection),
    }

    match preview.close_indicator {
        Some(start) => show_close_indicator(
            effects,
            session,
            start,
            options.close_point_px,
            &options.close_indicator_style,
        ),
        None => hide_close_indicator(effects, session),
    }

    match preview.segment {
        Some(points) => {
            upsert_stroke(effects, slot, &mut session.layers.segment, &points, styles)
        }
        None => drop_stroke(effects, slot, &mut session.layers.segment),
    }
}

/// Entfernt die cursorabhängigen Vorschauen (Cursor hat die Karte verlassen).
pub fn clear_preview(state: &mut AppState, slot: MapSlot) {
    let AppState { draw, effects, .. } = state;
    if let Some(session) = draw.as_mut().filter(|s| s.slot == slot) {
        remove_live_previews(effects, session);
    }
}

/// Löscht die Linie einer Karte.
///
/// Eine Session auf derselben Karte wird abgebrochen.
pub fn clear_line(state: &mut AppState, slot: MapSlot) {
    if state.drawing_slot() == Some(slot) {
        cancel_draw(state);
    }
    if state.annotations.lines.get(slot).is_none() {
        return;
    }
    set_line(state, slot, None);
    write_fragment(state);
    sync_clear_buttons(state);
    log::debug!("Linie auf {} gelöscht", slot);
}
