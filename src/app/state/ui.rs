//! UI-bezogener Zustand: Kopier-Button und Löschen-Buttons.

use crate::app::timers::TimerSlot;
use crate::core::MapSlot;

/// Zustand des „Copy URL"-Buttons.
#[derive(Debug, Clone, Default)]
pub struct CopyButtonState {
    /// Zeigt „Copied!"
    pub copied: bool,
    /// Timer für die automatische Rückkehr zur Ruhe-Beschriftung
    pub revert_timer: TimerSlot,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Kopier-Button
    pub copy_button: CopyButtonState,
    /// Sichtbarkeit der Löschen-Buttons je Karte
    pub clear_visible: [bool; 2],
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob der Löschen-Button einer Karte sichtbar ist.
    pub fn is_clear_visible(&self, slot: MapSlot) -> bool {
        self.clear_visible[slot.index()]
    }
}
