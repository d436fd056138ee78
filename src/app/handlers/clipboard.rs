//! Handler für den „Copy URL"-Button.

use crate::app::timers::TimerId;
use crate::app::use_cases;
use crate::app::AppState;

/// Fordert das Kopieren der aktuellen URL an.
pub fn copy_url(state: &mut AppState) {
    use_cases::clipboard::copy_url(state);
}

/// Kopieren bestätigt.
pub fn mark_copied(state: &mut AppState) {
    use_cases::clipboard::mark_copied(state);
}

/// Kopieren fehlgeschlagen.
pub fn report_failure(state: &mut AppState, reason: &str) {
    use_cases::clipboard::report_copy_failure(state, reason);
}

/// Beendet den „Copied!"-Zustand.
pub fn dismiss_copied(state: &mut AppState) {
    use_cases::clipboard::dismiss_copied(state);
}

/// Revert-Timer abgelaufen.
pub fn revert(state: &mut AppState, timer: TimerId) {
    use_cases::clipboard::revert_copy_button(state, timer);
}
