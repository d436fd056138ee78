//! Ansichtszustand beider Karten.

use crate::app::timers::TimerSlot;
use crate::core::{MapSlot, MapView};
use crate::location::ViewParams;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Ansicht je Karte (Index = `MapSlot::index`)
    pub maps: [MapView; 2],
    /// Sperre gegen Zoom-Echos während der Synchronisation
    pub zoom_guard: TimerSlot,
}

impl ViewState {
    /// Erstellt den View-Zustand aus Ansichts-Parametern.
    pub fn from_params(params: &ViewParams) -> Self {
        Self {
            maps: MapSlot::ALL.map(|slot| MapView::new(params.center(slot), params.zoom)),
            zoom_guard: TimerSlot::new(),
        }
    }

    /// Ansicht einer Karte.
    pub fn map(&self, slot: MapSlot) -> &MapView {
        &self.maps[slot.index()]
    }

    /// Veränderbare Ansicht einer Karte.
    pub fn map_mut(&mut self, slot: MapSlot) -> &mut MapView {
        &mut self.maps[slot.index()]
    }

    /// Aktuelle Ansichts-Parameter für den Query-String.
    ///
    /// Der Zoom stammt aus Karte 1.
    pub fn params(&self) -> ViewParams {
        ViewParams {
            zoom: self.map(MapSlot::One).zoom,
            centers: MapSlot::ALL.map(|slot| self.map(slot).center),
        }
    }
}
