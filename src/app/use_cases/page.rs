//! Use-Case: Seitenstart aus einer vollständigen URL.

use super::{clipboard, drawing, fragment};
use crate::app::effects::AppEffect;
use crate::app::AppState;
use crate::core::MapSlot;
use crate::location::{PageUrl, ViewParams};

/// Lädt eine Seite: Ansicht aus dem Query, Linien aus dem Fragment.
///
/// Eine laufende Session wird verworfen. Fehler beim Parsen der URL werden
/// an den Aufrufer propagiert und lassen den State unverändert.
pub fn load_page(state: &mut AppState, href: &str) -> anyhow::Result<()> {
    let page = PageUrl::parse(href)?;
    drawing::cancel_draw(state);

    let params = ViewParams::from_query(page.query(), &state.options);
    for slot in MapSlot::ALL {
        let center = params.center(slot);
        let map = state.view.map_mut(slot);
        map.center = center;
        map.zoom = params.zoom;
        state.effects.emit(AppEffect::SetView {
            slot,
            center,
            zoom: params.zoom,
        });
    }

    let raw_fragment = page.fragment().to_string();
    state.page = Some(page);
    clipboard::reset_copy_button(state);
    fragment::load_annotations(state, &raw_fragment);

    log::info!(
        "Seite geladen (Zoom {}, {} Linie(n))",
        params.zoom,
        MapSlot::ALL
            .iter()
            .filter(|&&slot| state.annotations.lines.get(slot).is_some())
            .count()
    );
    Ok(())
}
