//! Replay: spielt ein Skript aus Benutzeraktionen gegen eine Headless-Sitzung ab.
//!
//! Dient der CLI (`city-zoom replay`) und Integrationstests. Jede Aktion wird
//! in den passenden Intent übersetzt; Aktionen, die im Browser den Karten-
//! zustand direkt ändern (Zoomen, Verschieben), werden zuerst auf dem Host
//! nachgestellt.

mod script;

pub use script::{parse_script, ScriptLine, ScriptPoint, ScriptStep};

use anyhow::{Context, Result};

use crate::app::{AppEffect, AppIntent};
use crate::core::{LatLng, MapSlot};
use crate::host::HeadlessSession;
use crate::location::PageUrl;

/// Effekte einer einzelnen Skriptzeile.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub line: usize,
    pub effects: Vec<AppEffect>,
}

/// Spielt alle Schritte ab; bricht beim ersten Fehler mit Zeilenangabe ab.
pub fn run_script(session: &mut HeadlessSession, steps: &[ScriptLine]) -> Result<Vec<StepOutcome>> {
    steps
        .iter()
        .map(|step| {
            let effects = run_step(session, &step.step)
                .with_context(|| format!("Replay fehlgeschlagen in Zeile {}", step.line))?;
            Ok(StepOutcome {
                line: step.line,
                effects,
            })
        })
        .collect()
}

/// Führt einen einzelnen Schritt aus.
pub fn run_step(session: &mut HeadlessSession, step: &ScriptStep) -> Result<Vec<AppEffect>> {
    match step {
        ScriptStep::Load(url) => session.load(url),
        ScriptStep::Resize { slot, size } => session.dispatch(AppIntent::MapResized {
            slot: *slot,
            size: *size,
        }),
        ScriptStep::Draw(slot) => session.dispatch(AppIntent::DrawButtonPressed { slot: *slot }),
        ScriptStep::Click { slot, point } => {
            let point = resolve(session, *slot, *point);
            session.dispatch(AppIntent::MapClicked { slot: *slot, point })
        }
        ScriptStep::DoubleClick(slot) => {
            session.dispatch(AppIntent::MapDoubleClicked { slot: *slot })
        }
        ScriptStep::Move { slot, point } => {
            let point = resolve(session, *slot, *point);
            session.dispatch(AppIntent::PointerMoved { slot: *slot, point })
        }
        ScriptStep::Leave(slot) => session.dispatch(AppIntent::PointerLeft { slot: *slot }),
        ScriptStep::Escape => session.dispatch(AppIntent::EscapePressed),
        ScriptStep::Clear(slot) => session.dispatch(AppIntent::ClearButtonPressed { slot: *slot }),
        ScriptStep::Zoom { slot, zoom } => {
            session.host.views[slot.index()].zoom = *zoom;
            session.dispatch(AppIntent::ZoomEnded {
                slot: *slot,
                zoom: *zoom,
            })
        }
        ScriptStep::Pan { slot, center } => {
            session.host.views[slot.index()].center = *center;
            session.dispatch(AppIntent::MoveEnded {
                slot: *slot,
                center: *center,
            })
        }
        ScriptStep::Search { slot, location } => session.dispatch(AppIntent::LocationFound {
            slot: *slot,
            location: *location,
        }),
        ScriptStep::Hash(fragment) => {
            if let Ok(page) = PageUrl::parse(&session.host.url) {
                session.host.url = page.with_fragment(Some(fragment)).href().to_string();
            }
            session.dispatch(AppIntent::FragmentChanged {
                fragment: fragment.clone(),
            })
        }
        ScriptStep::Copy => session.dispatch(AppIntent::CopyUrlRequested),
        ScriptStep::Clipboard { denied } => {
            session.host.clipboard_denied = *denied;
            Ok(Vec::new())
        }
        ScriptStep::Wait(ms) => session.advance(*ms),
    }
}

fn resolve(session: &HeadlessSession, slot: MapSlot, point: ScriptPoint) -> LatLng {
    match point {
        ScriptPoint::Geo(point) => point,
        ScriptPoint::Pixel(pixel) => session
            .state
            .view
            .map(slot)
            .container_point_to_lat_lng(pixel),
    }
}
