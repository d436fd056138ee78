//! Kartenansicht (Zentrum, Zoom, Viewport) mit Web-Mercator-Projektion.
//!
//! Bildet das Verhalten der Karten-Bibliothek nach (`EPSG:3857`, 256-px-Kacheln),
//! damit Pixel-Abstände (Close-Loop-Schwelle) ohne Rückfrage beim Host
//! berechnet werden können.

use super::LatLng;
use glam::DVec2;
use std::f64::consts::PI;

/// Kachelgröße in Pixeln bei Zoom 0.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Maximale Breite, die Web-Mercator darstellen kann.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Ansichtszustand einer einzelnen Karte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// Kartenmittelpunkt
    pub center: LatLng,
    /// Ganzzahliger Zoom-Level
    pub zoom: i32,
    /// Größe des Karten-Containers in Pixeln
    pub viewport_size: DVec2,
}

impl MapView {
    /// Erstellt eine Ansicht mit leerem Viewport.
    pub fn new(center: LatLng, zoom: i32) -> Self {
        Self {
            center,
            zoom,
            viewport_size: DVec2::ZERO,
        }
    }

    /// Welt-Pixelbreite bei aktuellem Zoom.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE_PX * 2_f64.powi(self.zoom)
    }

    /// Projiziert einen geografischen Punkt auf absolute Welt-Pixel.
    pub fn project(&self, point: LatLng) -> DVec2 {
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (point.lng + 180.0) / 360.0;
        let y = 0.5 - (PI / 4.0 + lat / 2.0).tan().ln() / (2.0 * PI);
        DVec2::new(x, y) * self.world_size()
    }

    /// Umkehrung von [`MapView::project`].
    pub fn unproject(&self, pixel: DVec2) -> LatLng {
        let normalized = pixel / self.world_size();
        let lng = normalized.x * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * normalized.y)).sinh().atan().to_degrees();
        LatLng::new(lat, lng)
    }

    /// Geografischer Punkt → Container-Pixel (Ursprung oben links).
    pub fn lat_lng_to_container_point(&self, point: LatLng) -> DVec2 {
        self.project(point) - self.project(self.center) + self.viewport_size / 2.0
    }

    /// Container-Pixel → geografischer Punkt.
    pub fn container_point_to_lat_lng(&self, pixel: DVec2) -> LatLng {
        self.unproject(pixel - self.viewport_size / 2.0 + self.project(self.center))
    }

    /// Bildschirmabstand zweier geografischer Punkte in Pixeln.
    pub fn pixel_distance(&self, a: LatLng, b: LatLng) -> f64 {
        self.lat_lng_to_container_point(a)
            .distance(self.lat_lng_to_container_point(b))
    }
}
