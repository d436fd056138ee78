//! Use-Cases für Linien im URL-Fragment: lesen, rendern, zurückschreiben.

use super::clipboard;
use super::layers::{add_stroke, drop_stroke, StrokePair};
use crate::app::effects::AppEffect;
use crate::app::AppState;
use crate::codec::{decode_fragment, encode_fragment};
use crate::core::{MapSlot, Polyline};
use crate::shared::ViewerOptions;

/// Stil-Paar fertiger Linien.
pub fn line_styles(options: &ViewerOptions) -> StrokePair<'_> {
    StrokePair {
        line: &options.line_style,
        border: &options.line_border_style,
    }
}

/// Ersetzt die Linie einer Karte (Daten und Layer).
///
/// `None` entfernt die Linie; bestehende Layer werden immer neu angelegt.
pub fn set_line(state: &mut AppState, slot: MapSlot, line: Option<Polyline>) {
    let AppState {
        annotations,
        effects,
        options,
        ..
    } = state;

    drop_stroke(effects, slot, annotations.rendered_mut(slot));
    if let Some(line) = &line {
        let layers = add_stroke(effects, slot, line.points(), line_styles(options));
        *annotations.rendered_mut(slot) = Some(layers);
    }
    annotations.lines.set(slot, line);
}

/// Blendet Löschen-Buttons passend zu den vorhandenen Linien ein oder aus.
pub fn sync_clear_buttons(state: &mut AppState) {
    for slot in MapSlot::ALL {
        let visible = state.annotations.lines.get(slot).is_some();
        if state.ui.is_clear_visible(slot) != visible {
            state.ui.clear_visible[slot.index()] = visible;
            state
                .effects
                .emit(AppEffect::SetClearButtonVisible { slot, visible });
        }
    }
}

/// Serialisiert beide Linien ins Fragment und ersetzt die Seiten-URL.
///
/// Ohne Linien wird das `#` entfernt.
pub fn write_fragment(state: &mut AppState) {
    let encoded = encode_fragment(&state.annotations.lines);
    state.annotations.known_fragment = encoded.clone();

    match state.page.as_ref() {
        Some(page) => {
            let next = page.with_fragment(encoded.as_deref());
            state.effects.emit(AppEffect::ReplaceFragment {
                url: next.href().to_string(),
            });
            state.page = Some(next);
        }
        None => log::debug!("Fragment nicht geschrieben: keine Seite geladen"),
    }

    clipboard::dismiss_copied(state);
}

/// Liest Linien aus einem Fragment-Text und ersetzt beide Karten.
///
/// Unlesbarer Inhalt ergibt leere Karten und einen Hinweis.
pub fn load_annotations(state: &mut AppState, raw: &str) {
    let decoded = decode_fragment(raw);
    if decoded.is_rejected(raw) {
        let text = state.options.invalid_fragment_message.clone();
        state.effects.emit(AppEffect::Notify { text });
    } else if let Some(format) = decoded.format {
        log::info!("Annotationen aus Fragment geladen ({})", format);
    }

    let mut annotations = decoded.annotations;
    for slot in MapSlot::ALL {
        let line = annotations.take(slot);
        if line.is_some() || state.annotations.lines.get(slot).is_some() {
            set_line(state, slot, line);
        }
    }

    let trimmed = raw.trim();
    state.annotations.known_fragment = (!trimmed.is_empty()).then(|| trimmed.to_string());
    sync_clear_buttons(state);
}

/// Reagiert auf ein geändertes Fragment (hashchange).
///
/// Das eigene, zuletzt geschriebene Fragment wird nicht erneut gelesen.
pub fn apply_fragment(state: &mut AppState, fragment: &str) {
    if let Some(page) = state.page.as_ref() {
        state.page = Some(page.with_fragment(Some(fragment)));
    }

    let trimmed = fragment.trim();
    let current = (!trimmed.is_empty()).then_some(trimmed);
    if current == state.annotations.known_fragment.as_deref() {
        log::debug!("Fragment unverändert, kein erneutes Lesen");
        return;
    }

    load_annotations(state, fragment);
}
