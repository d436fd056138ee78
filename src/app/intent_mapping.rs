//! Mapping von Intents auf mutierende App-Commands.
//!
//! Entscheidungen, die nur Zustand lesen (Schließen-Klick, Session-Wechsel,
//! Timer-Zuordnung), fallen hier; die Handler führen nur noch aus.

use super::tools::ClickAction;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PageLoaded { url } => vec![AppCommand::LoadPage { url }],
        AppIntent::FragmentChanged { fragment } => vec![
            AppCommand::ApplyFragment { fragment },
            AppCommand::DismissCopiedState,
        ],

        // === Karten & Sync ===
        AppIntent::MapResized { slot, size } => vec![AppCommand::SetViewportSize { slot, size }],
        AppIntent::ZoomEnded { slot, zoom } => {
            if state.view.zoom_guard.is_active() {
                vec![AppCommand::RecordZoom { slot, zoom }]
            } else {
                vec![
                    AppCommand::SyncZoom { source: slot, zoom },
                    AppCommand::WriteViewParams,
                ]
            }
        }
        AppIntent::MoveEnded { slot, center } => vec![
            AppCommand::RecordCenter { slot, center },
            AppCommand::WriteViewParams,
        ],
        AppIntent::LocationFound { slot, location } => {
            vec![AppCommand::CenterOnLocation { slot, location }]
        }

        // === Zeichnen ===
        AppIntent::DrawButtonPressed { slot } => match state.drawing_slot() {
            Some(active) if active == slot => vec![AppCommand::FinishDraw { slot }],
            Some(active) => vec![
                AppCommand::FinishDraw { slot: active },
                AppCommand::StartDraw { slot },
            ],
            None => vec![AppCommand::StartDraw { slot }],
        },
        AppIntent::ClearButtonPressed { slot } => vec![AppCommand::ClearLine { slot }],
        AppIntent::MapClicked { slot, point } => {
            let Some(session) = state.session_on(slot) else {
                return vec![];
            };
            let view = state.view.map(slot);
            match session.classify_click(point, view, state.options.close_point_px) {
                ClickAction::CloseLoop => vec![
                    AppCommand::CloseDrawLoop { slot },
                    AppCommand::FinishDraw { slot },
                ],
                ClickAction::AddPoint => vec![AppCommand::AddDrawPoint { slot, point }],
            }
        }
        AppIntent::MapDoubleClicked { slot } => {
            if state.session_on(slot).is_some() {
                vec![AppCommand::FinishDraw { slot }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerMoved { slot, point } => {
            if state.session_on(slot).is_some() {
                vec![AppCommand::UpdateDrawPreview {
                    slot,
                    cursor: point,
                }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerLeft { slot } => {
            if state.session_on(slot).is_some() {
                vec![AppCommand::ClearDrawPreview { slot }]
            } else {
                vec![]
            }
        }
        AppIntent::EscapePressed => match state.drawing_slot() {
            Some(slot) => vec![AppCommand::FinishDraw { slot }],
            None => vec![],
        },

        // === Zwischenablage ===
        AppIntent::CopyUrlRequested => vec![AppCommand::CopyUrl],
        AppIntent::ClipboardWriteSucceeded => vec![AppCommand::MarkCopied],
        AppIntent::ClipboardWriteFailed { reason } => {
            vec![AppCommand::ReportCopyFailure { reason }]
        }

        // === Timer ===
        AppIntent::TimerElapsed { timer } => {
            if state.view.zoom_guard.is(timer) {
                vec![AppCommand::ReleaseZoomGuard { timer }]
            } else if state.ui.copy_button.revert_timer.is(timer) {
                vec![AppCommand::RevertCopyButton { timer }]
            } else {
                log::debug!("Veralteter Timer ignoriert: {}", timer);
                vec![]
            }
        }
    }
}
