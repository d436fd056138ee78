//! Ansichts-Parameter im Query-String: `zoom`, `lat1`, `lon1`, `lat2`, `lon2`.

use crate::core::{LatLng, MapSlot};
use crate::shared::ViewerOptions;
use std::collections::HashMap;
use url::form_urlencoded;

/// Nachkommastellen für geschriebene Zentren.
pub const CENTER_DECIMALS: usize = 5;

/// Zoom und Zentren beider Karten, wie sie in der URL stehen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Gemeinsamer Zoom-Level
    pub zoom: i32,
    /// Zentrum je Slot (Index = `MapSlot::index`)
    pub centers: [LatLng; 2],
}

impl ViewParams {
    /// Startansicht aus den Optionen.
    pub fn defaults(options: &ViewerOptions) -> Self {
        Self {
            zoom: options.clamp_zoom(options.default_zoom),
            centers: MapSlot::ALL.map(|slot| options.default_center(slot)),
        }
    }

    /// Liest die Parameter aus einem Query-String (ohne `?`).
    ///
    /// Fehlende oder ungültige Werte fallen einzeln auf die Defaults zurück.
    /// Ein Zentrum wird nur übernommen, wenn beide Schlüssel gültig sind.
    pub fn from_query(query: &str, options: &ViewerOptions) -> Self {
        let mut pairs: HashMap<String, String> = HashMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            pairs.entry(key.into_owned()).or_insert_with(|| value.into_owned());
        }

        let mut params = Self::defaults(options);
        if let Some(zoom) = pairs.get("zoom").and_then(|z| parse_zoom(z)) {
            params.zoom = options.clamp_zoom(zoom);
        }
        for slot in MapSlot::ALL {
            let lat = pairs.get(&format!("lat{}", slot.id())).and_then(|v| parse_coord(v));
            let lon = pairs.get(&format!("lon{}", slot.id())).and_then(|v| parse_coord(v));
            if let (Some(lat), Some(lon)) = (lat, lon) {
                params.centers[slot.index()] = LatLng::new(lat, lon);
            }
        }
        params
    }

    /// Zentrum eines Slots.
    pub fn center(&self, slot: MapSlot) -> LatLng {
        self.centers[slot.index()]
    }

    /// Serialisiert in fester Reihenfolge mit 5 Nachkommastellen.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("zoom", &self.zoom.to_string());
        for slot in MapSlot::ALL {
            let center = self.center(slot);
            serializer.append_pair(&format!("lat{}", slot.id()), &format_fixed(center.lat));
            serializer.append_pair(&format!("lon{}", slot.id()), &format_fixed(center.lng));
        }
        serializer.finish()
    }
}

/// Ganzzahl oder Gleitkommazahl (Richtung 0 gekürzt).
fn parse_zoom(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    raw.parse::<i32>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|z| z.is_finite())
            .map(|z| z.trunc() as i32)
    })
}

fn parse_coord(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Festkomma-Darstellung; `-0.00000` wird zu `0.00000`.
fn format_fixed(value: f64) -> String {
    let text = format!("{:.*}", CENTER_DECIMALS, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}
