//! Handler für Seitenstart und Fragment-Änderungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt die Seite und propagiert URL-Fehler an den Aufrufer.
pub fn load(state: &mut AppState, url: &str) -> anyhow::Result<()> {
    use_cases::page::load_page(state, url)
}

/// Übernimmt ein geändertes Fragment.
pub fn apply_fragment(state: &mut AppState, fragment: &str) {
    use_cases::fragment::apply_fragment(state, fragment);
}
