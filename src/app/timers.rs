//! Abbrechbare Timer mit Handles.
//!
//! Ein [`TimerSlot`] hält höchstens einen laufenden Timer. Neu setzen bricht
//! den vorherigen ab; ein `TimerElapsed` mit fremdem Handle wird ignoriert.

use super::effects::{AppEffect, EffectQueue};
use serde::Serialize;

/// Handle eines geplanten Timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Platz für genau einen laufenden Timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSlot {
    active: Option<TimerId>,
}

impl TimerSlot {
    /// Erstellt einen leeren Slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bricht einen laufenden Timer ab und plant einen neuen.
    pub fn arm(&mut self, queue: &mut EffectQueue, delay_ms: u64) -> TimerId {
        self.cancel(queue);
        let timer = queue.new_timer();
        self.active = Some(timer);
        queue.emit(AppEffect::ScheduleTimer { timer, delay_ms });
        timer
    }

    /// Bricht einen laufenden Timer ab (no-op, wenn keiner läuft).
    pub fn cancel(&mut self, queue: &mut EffectQueue) {
        if let Some(timer) = self.active.take() {
            queue.emit(AppEffect::CancelTimer { timer });
        }
    }

    /// Quittiert einen abgelaufenen Timer.
    ///
    /// `true`, wenn `timer` der laufende Timer dieses Slots war.
    pub fn finish(&mut self, timer: TimerId) -> bool {
        if self.active == Some(timer) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Gibt `true` zurück, wenn `timer` der laufende Timer ist.
    pub fn is(&self, timer: TimerId) -> bool {
        self.active == Some(timer)
    }

    /// Gibt `true` zurück, wenn ein Timer läuft.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
