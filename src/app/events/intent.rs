use crate::app::timers::TimerId;
use crate::core::{LatLng, MapSlot};
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Karten, Buttons und System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Seite wurde mit dieser URL geladen
    PageLoaded { url: String },
    /// Karten-Container hat eine neue Größe (Pixel)
    MapResized { slot: MapSlot, size: DVec2 },
    /// Zoom-Animation einer Karte beendet
    ZoomEnded { slot: MapSlot, zoom: i32 },
    /// Verschieben einer Karte beendet
    MoveEnded { slot: MapSlot, center: LatLng },
    /// Suchergebnis in einer Karte gewählt
    LocationFound { slot: MapSlot, location: LatLng },
    /// Zeichnen-Button einer Karte gedrückt
    DrawButtonPressed { slot: MapSlot },
    /// Löschen-Button einer Karte gedrückt
    ClearButtonPressed { slot: MapSlot },
    /// Klick in eine Karte
    MapClicked { slot: MapSlot, point: LatLng },
    /// Doppelklick in eine Karte
    MapDoubleClicked { slot: MapSlot },
    /// Mauszeiger über einer Karte bewegt
    PointerMoved { slot: MapSlot, point: LatLng },
    /// Mauszeiger hat eine Karte verlassen
    PointerLeft { slot: MapSlot },
    /// Escape-Taste
    EscapePressed,
    /// Fragment der Seiten-URL geändert (ohne `#`)
    FragmentChanged { fragment: String },
    /// „Copy URL" gedrückt
    CopyUrlRequested,
    /// Zwischenablage hat den Text übernommen
    ClipboardWriteSucceeded,
    /// Zwischenablage hat den Text abgelehnt
    ClipboardWriteFailed { reason: String },
    /// Geplanter Timer ist abgelaufen
    TimerElapsed { timer: TimerId },
}
