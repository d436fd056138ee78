//! Controller: übersetzt Host-Events in Commands und führt sie aus.

use super::effects::AppEffect;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Liefert die dabei entstandenen Effekte in Ausführungsreihenfolge.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: AppIntent,
    ) -> anyhow::Result<Vec<AppEffect>> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(state.effects.drain())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Seite ===
            AppCommand::LoadPage { url } => handlers::page::load(state, &url)?,
            AppCommand::ApplyFragment { fragment } => {
                handlers::page::apply_fragment(state, &fragment)
            }

            // === Karten & Sync ===
            AppCommand::SetViewportSize { slot, size } => {
                handlers::view::set_viewport_size(state, slot, size)
            }
            AppCommand::SyncZoom { source, zoom } => handlers::view::sync_zoom(state, source, zoom),
            AppCommand::RecordZoom { slot, zoom } => handlers::view::record_zoom(state, slot, zoom),
            AppCommand::RecordCenter { slot, center } => {
                handlers::view::record_center(state, slot, center)
            }
            AppCommand::WriteViewParams => handlers::view::write_view_params(state),
            AppCommand::CenterOnLocation { slot, location } => {
                handlers::view::center_on_location(state, slot, location)
            }
            AppCommand::ReleaseZoomGuard { timer } => {
                handlers::view::release_zoom_guard(state, timer)
            }

            // === Zeichnen ===
            AppCommand::StartDraw { slot } => handlers::drawing::start(state, slot),
            AppCommand::FinishDraw { slot } => handlers::drawing::finish(state, slot),
            AppCommand::AddDrawPoint { slot, point } => {
                handlers::drawing::add_point(state, slot, point)
            }
            AppCommand::CloseDrawLoop { slot } => handlers::drawing::close_loop(state, slot),
            AppCommand::UpdateDrawPreview { slot, cursor } => {
                handlers::drawing::update_preview(state, slot, cursor)
            }
            AppCommand::ClearDrawPreview { slot } => handlers::drawing::clear_preview(state, slot),
            AppCommand::ClearLine { slot } => handlers::drawing::clear_line(state, slot),

            // === Zwischenablage ===
            AppCommand::CopyUrl => handlers::clipboard::copy_url(state),
            AppCommand::MarkCopied => handlers::clipboard::mark_copied(state),
            AppCommand::ReportCopyFailure { reason } => {
                handlers::clipboard::report_failure(state, &reason)
            }
            AppCommand::DismissCopiedState => handlers::clipboard::dismiss_copied(state),
            AppCommand::RevertCopyButton { timer } => handlers::clipboard::revert(state, timer),
        }

        Ok(())
    }
}
