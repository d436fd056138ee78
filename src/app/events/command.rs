use crate::app::timers::TimerId;
use crate::core::{LatLng, MapSlot};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Seite ===
    /// Seiten-URL übernehmen: Ansicht aus Query, Linien aus Fragment
    LoadPage { url: String },
    /// Fragment lesen und Linien ersetzen
    ApplyFragment { fragment: String },

    // === Karten & Sync ===
    /// Viewport-Größe einer Karte setzen
    SetViewportSize { slot: MapSlot, size: DVec2 },
    /// Zoom von `source` auf beide Karten übertragen
    SyncZoom { source: MapSlot, zoom: i32 },
    /// Zoom einer Karte nur vermerken
    RecordZoom { slot: MapSlot, zoom: i32 },
    /// Zentrum einer Karte vermerken
    RecordCenter { slot: MapSlot, center: LatLng },
    /// Ansichts-Parameter in den Query-String schreiben
    WriteViewParams,
    /// Karte auf Suchergebnis zentrieren
    CenterOnLocation { slot: MapSlot, location: LatLng },
    /// Zoom-Sperre nach Ablauf freigeben
    ReleaseZoomGuard { timer: TimerId },

    // === Zeichnen ===
    /// Zeichen-Session auf einer Karte starten
    StartDraw { slot: MapSlot },
    /// Zeichen-Session abschließen und Linie übernehmen
    FinishDraw { slot: MapSlot },
    /// Punkt an die Session anhängen
    AddDrawPoint { slot: MapSlot, point: LatLng },
    /// Startpunkt wiederholen (Schleife schließen)
    CloseDrawLoop { slot: MapSlot },
    /// Live-Vorschau für Cursor-Position aktualisieren
    UpdateDrawPreview { slot: MapSlot, cursor: LatLng },
    /// Live-Vorschau entfernen (Punkte bleiben)
    ClearDrawPreview { slot: MapSlot },
    /// Linie einer Karte löschen
    ClearLine { slot: MapSlot },

    // === Zwischenablage ===
    /// Aktuelle URL in die Zwischenablage schreiben
    CopyUrl,
    /// Kopier-Button auf „Copied!" setzen
    MarkCopied,
    /// Kopieren fehlgeschlagen: URL zum manuellen Kopieren anzeigen
    ReportCopyFailure { reason: String },
    /// „Copied!"-Zustand beenden
    DismissCopiedState,
    /// Kopier-Button nach Ablauf zurücksetzen
    RevertCopyButton { timer: TimerId },
}
