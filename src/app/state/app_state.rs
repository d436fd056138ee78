use crate::app::effects::EffectQueue;
use crate::app::tools::FreehandSession;
use crate::app::CommandLog;
use crate::core::MapSlot;
use crate::location::{PageUrl, ViewParams};
use crate::shared::ViewerOptions;

use super::{AnnotationState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Seiten-URL (None = Seite noch nicht geladen)
    pub page: Option<PageUrl>,
    /// View-State beider Karten
    pub view: ViewState,
    /// Linien und ihre Layer
    pub annotations: AnnotationState,
    /// Laufende Zeichen-Session
    pub draw: Option<FreehandSession>,
    /// UI-State
    pub ui: UiState,
    /// Ausstehende Effekte und Handle-Vergabe
    pub effects: EffectQueue,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Schwellen, Timer, Stile, Texte)
    pub options: ViewerOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            page: None,
            view: ViewState::from_params(&ViewParams::defaults(&options)),
            annotations: AnnotationState::new(),
            draw: None,
            ui: UiState::new(),
            effects: EffectQueue::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Slot der laufenden Zeichen-Session.
    pub fn drawing_slot(&self) -> Option<MapSlot> {
        self.draw.as_ref().map(|session| session.slot)
    }

    /// Laufende Session, falls sie zu `slot` gehört.
    pub fn session_on(&self, slot: MapSlot) -> Option<&FreehandSession> {
        self.draw.as_ref().filter(|session| session.slot == slot)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
