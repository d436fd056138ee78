//! Use-Cases für den „Copy URL"-Button.

use crate::app::effects::AppEffect;
use crate::app::timers::TimerId;
use crate::app::AppState;

fn emit_label(state: &mut AppState) {
    let copied = state.ui.copy_button.copied;
    let label = if copied {
        state.options.copy_label_copied.clone()
    } else {
        state.options.copy_label_idle.clone()
    };
    state.effects.emit(AppEffect::SetCopyButton { label, copied });
}

/// Setzt den Button ohne Timer in den Ruhezustand (Seitenstart).
pub fn reset_copy_button(state: &mut AppState) {
    let AppState { ui, effects, .. } = state;
    ui.copy_button.revert_timer.cancel(effects);
    ui.copy_button.copied = false;
    emit_label(state);
}

/// Schreibt die aktuelle Seiten-URL in die Zwischenablage.
pub fn copy_url(state: &mut AppState) {
    match state.page.as_ref() {
        Some(page) => {
            let text = page.href().to_string();
            state.effects.emit(AppEffect::WriteClipboard { text });
        }
        None => log::warn!("Kopieren ignoriert: keine Seite geladen"),
    }
}

/// Zeigt „Copied!" und plant die Rückkehr zur Ruhe-Beschriftung.
pub fn mark_copied(state: &mut AppState) {
    state.ui.copy_button.copied = true;
    emit_label(state);

    let AppState {
        ui,
        effects,
        options,
        ..
    } = state;
    ui.copy_button
        .revert_timer
        .arm(effects, options.copied_revert_ms);
}

/// Meldet einen Fehler und bietet die URL zum manuellen Kopieren an.
pub fn report_copy_failure(state: &mut AppState, reason: &str) {
    log::error!("URL konnte nicht kopiert werden: {}", reason);
    let url = state
        .page
        .as_ref()
        .map(|page| page.href().to_string())
        .unwrap_or_default();
    state.effects.emit(AppEffect::ShowManualCopy { url });
}

/// Beendet den „Copied!"-Zustand vorzeitig (no-op im Ruhezustand).
pub fn dismiss_copied(state: &mut AppState) {
    if !state.ui.copy_button.copied {
        return;
    }
    state.ui.copy_button.copied = false;
    emit_label(state);

    let AppState { ui, effects, .. } = state;
    ui.copy_button.revert_timer.cancel(effects);
}

/// Timer abgelaufen: zurück zur Ruhe-Beschriftung.
pub fn revert_copy_button(state: &mut AppState, timer: TimerId) {
    if !state.ui.copy_button.revert_timer.finish(timer) {
        return;
    }
    state.ui.copy_button.copied = false;
    emit_label(state);
}
