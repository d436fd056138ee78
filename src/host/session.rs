//! Headless-Sitzung: Controller, State und Host in einer Schleife.

use std::collections::VecDeque;

use super::{dispatch_effects, HeadlessHost};
use crate::app::{AppController, AppEffect, AppIntent, AppState};
use crate::shared::ViewerOptions;

/// Treibt den Kern wie ein Browser: Intents rein, Effekte auf den Host,
/// Host-Rückmeldungen (Zoom-Echo, Zwischenablage, Timer) als neue Intents.
pub struct HeadlessSession {
    pub state: AppState,
    pub host: HeadlessHost,
    controller: AppController,
}

impl HeadlessSession {
    /// Neue Sitzung mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Neue Sitzung mit eigenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            host: HeadlessHost::new(),
            controller: AppController::new(),
        }
    }

    /// Verarbeitet einen Intent samt aller Rückmeldungen des Hosts.
    ///
    /// Liefert sämtliche ausgeführten Effekte in Reihenfolge.
    pub fn dispatch(&mut self, intent: AppIntent) -> anyhow::Result<Vec<AppEffect>> {
        let mut queue = VecDeque::from([intent]);
        let mut executed = Vec::new();

        while let Some(intent) = queue.pop_front() {
            let effects = self.controller.handle_intent(&mut self.state, intent)?;
            dispatch_effects(&mut self.host, &effects);
            executed.extend(effects);

            for (slot, zoom) in self.host.take_zoom_echoes() {
                queue.push_back(AppIntent::ZoomEnded { slot, zoom });
            }
            match self.host.take_clipboard_outcome() {
                Some(true) => queue.push_back(AppIntent::ClipboardWriteSucceeded),
                Some(false) => queue.push_back(AppIntent::ClipboardWriteFailed {
                    reason: "Zugriff verweigert".to_string(),
                }),
                None => {}
            }
        }

        Ok(executed)
    }

    /// Lädt eine Seite (wie ein Browser-Start).
    pub fn load(&mut self, url: &str) -> anyhow::Result<Vec<AppEffect>> {
        self.host.url = url.to_string();
        self.dispatch(AppIntent::PageLoaded {
            url: url.to_string(),
        })
    }

    /// Lässt `ms` Millisekunden virtuelle Zeit vergehen und feuert fällige Timer.
    pub fn advance(&mut self, ms: u64) -> anyhow::Result<Vec<AppEffect>> {
        let until = self.host.now_ms().saturating_add(ms);
        let mut executed = Vec::new();
        while let Some(timer) = self.host.pop_due_timer(until) {
            executed.extend(self.dispatch(AppIntent::TimerElapsed { timer })?);
        }
        self.host.set_now(until);
        Ok(executed)
    }
}

impl Default for HeadlessSession {
    fn default() -> Self {
        Self::new()
    }
}
