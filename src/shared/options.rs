//! Zentrale Konfiguration für den City-Zoom-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::LatLng;
use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Schwelle in Screen-Pixeln, ab der ein Klick die Linie am Startpunkt schließt.
pub const CLOSE_POINT_PX: f64 = 15.0;
/// Strichmuster der gestrichelten Vorschau-Linien.
pub const PREVIEW_DASH_ARRAY: &str = "5,5";

// ── Karten ──────────────────────────────────────────────────────────

/// Startzentrum Karte 1 (Grand Rapids, MI).
pub const DEFAULT_CENTER_1: LatLng = LatLng::new(42.9634, -85.6681);
/// Startzentrum Karte 2 (Detroit, MI).
pub const DEFAULT_CENTER_2: LatLng = LatLng::new(42.3314, -83.0458);
/// Start-Zoom beider Karten.
pub const DEFAULT_ZOOM: i32 = 13;
/// Minimaler Zoom-Level.
pub const ZOOM_MIN: i32 = 0;
/// Maximaler Zoom-Level (OSM-Kacheln).
pub const ZOOM_MAX: i32 = 19;
/// Zoom nach Auswahl eines Suchergebnisses.
pub const SEARCH_RESULT_ZOOM: i32 = 13;

// ── Timer ───────────────────────────────────────────────────────────

/// Sperrzeit nach einem synchronisierten Zoom in Millisekunden.
pub const ZOOM_SYNC_DEBOUNCE_MS: u64 = 100;
/// Anzeigedauer von „Copied!" in Millisekunden.
pub const COPIED_REVERT_MS: u64 = 10_000;

// ── Texte ───────────────────────────────────────────────────────────

/// Hinweis bei unlesbarem Fragment.
pub const INVALID_FRAGMENT_MESSAGE: &str = "Invalid map annotations";
/// Beschriftung des Kopier-Buttons im Ruhezustand.
pub const COPY_LABEL_IDLE: &str = "Copy URL";
/// Beschriftung nach erfolgreichem Kopieren.
pub const COPY_LABEL_COPIED: &str = "Copied!";

/// Linienstil für Polylinien (Farbe, Breite, optionales Strichmuster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// CSS-Farbe
    pub color: String,
    /// Linienbreite in Pixeln
    pub weight: f32,
    /// Strichmuster (`None` = durchgezogen)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

impl StrokeStyle {
    /// Durchgezogene Linie.
    pub fn solid(color: &str, weight: f32) -> Self {
        Self {
            color: color.to_string(),
            weight,
            dash_array: None,
        }
    }

    /// Gleiche Linie mit Strichmuster.
    pub fn dashed(&self, dash_array: &str) -> Self {
        Self {
            dash_array: Some(dash_array.to_string()),
            ..self.clone()
        }
    }
}

/// Stil des Kreis-Markers am Startpunkt (Schließen-Hinweis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    /// Randfarbe
    pub color: String,
    /// Füllfarbe
    pub fill_color: String,
    /// Deckkraft der Füllung (0.0–1.0)
    pub fill_opacity: f32,
    /// Randbreite in Pixeln
    pub weight: f32,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            color: "#0088ff".to_string(),
            fill_color: "#0088ff".to_string(),
            fill_opacity: 0.25,
            weight: 2.0,
        }
    }
}

fn default_line_style() -> StrokeStyle {
    StrokeStyle::solid("#0088ff", 4.0)
}

fn default_border_style() -> StrokeStyle {
    StrokeStyle::solid("white", 8.0)
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `city_zoom.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Schließen-Schwelle in Screen-Pixeln
    pub close_point_px: f64,
    /// Stil der fertigen Linie
    pub line_style: StrokeStyle,
    /// Stil der weißen Kontur unter der Linie
    pub line_border_style: StrokeStyle,
    /// Strichmuster für Vorschau-Linien
    pub preview_dash_array: String,
    /// Stil des Schließen-Hinweises
    pub close_indicator_style: CircleStyle,

    // ── Karten ──────────────────────────────────────────────────
    /// Startzentrum Karte 1
    pub default_center_1: LatLng,
    /// Startzentrum Karte 2
    pub default_center_2: LatLng,
    /// Start-Zoom
    pub default_zoom: i32,
    /// Minimaler Zoom-Level
    pub zoom_min: i32,
    /// Maximaler Zoom-Level
    pub zoom_max: i32,
    /// Zoom nach Suchergebnis
    pub search_result_zoom: i32,

    // ── Timer ───────────────────────────────────────────────────
    /// Sperrzeit der Zoom-Synchronisation (ms)
    pub zoom_sync_debounce_ms: u64,
    /// Anzeigedauer von „Copied!" (ms)
    pub copied_revert_ms: u64,

    // ── Texte ───────────────────────────────────────────────────
    /// Hinweis bei unlesbarem Fragment
    pub invalid_fragment_message: String,
    /// Kopier-Button im Ruhezustand
    pub copy_label_idle: String,
    /// Kopier-Button nach Erfolg
    pub copy_label_copied: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            close_point_px: CLOSE_POINT_PX,
            line_style: default_line_style(),
            line_border_style: default_border_style(),
            preview_dash_array: PREVIEW_DASH_ARRAY.to_string(),
            close_indicator_style: CircleStyle::default(),

            default_center_1: DEFAULT_CENTER_1,
            default_center_2: DEFAULT_CENTER_2,
            default_zoom: DEFAULT_ZOOM,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            search_result_zoom: SEARCH_RESULT_ZOOM,

            zoom_sync_debounce_ms: ZOOM_SYNC_DEBOUNCE_MS,
            copied_revert_ms: COPIED_REVERT_MS,

            invalid_fragment_message: INVALID_FRAGMENT_MESSAGE.to_string(),
            copy_label_idle: COPY_LABEL_IDLE.to_string(),
            copy_label_copied: COPY_LABEL_COPIED.to_string(),
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML; Grundlage für eigene Anpassungen.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use anyhow::Context;

        let content = toml::to_string_pretty(self).context("Optionen nicht als TOML darstellbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen geschrieben: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("city-zoom"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("city_zoom.toml")
    }

    /// Startzentrum eines Slots.
    pub fn default_center(&self, slot: crate::core::MapSlot) -> LatLng {
        match slot {
            crate::core::MapSlot::One => self.default_center_1,
            crate::core::MapSlot::Two => self.default_center_2,
        }
    }

    /// Begrenzt einen Zoom-Level auf `[zoom_min, zoom_max]`.
    pub fn clamp_zoom(&self, zoom: i32) -> i32 {
        zoom.clamp(self.zoom_min, self.zoom_max.max(self.zoom_min))
    }

    /// Gestrichelte Variante der Linie (Vorschau).
    pub fn preview_line_style(&self) -> StrokeStyle {
        self.line_style.dashed(&self.preview_dash_array)
    }

    /// Gestrichelte Variante der Kontur (Vorschau).
    pub fn preview_border_style(&self) -> StrokeStyle {
        self.line_border_style.dashed(&self.preview_dash_array)
    }
}
