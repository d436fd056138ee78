//! Host-Anbindung: Kollaborateur-Traits und Effekt-Dispatch.
//!
//! Der Kern rendert nichts selbst. Ein Host (Browser-Brücke, Headless-Replay,
//! Tests) implementiert die Traits und führt die vom Controller gelieferten
//! [`AppEffect`]s aus. Ergebnisse (Klicks, Timer, Zwischenablage) kommen als
//! [`crate::app::AppIntent`] zurück.

mod headless;
mod session;

pub use headless::{HeadlessHost, HeadlessLayer};
pub use session::HeadlessSession;

use crate::app::{AppEffect, LayerId, TimerId};
use crate::core::{LatLng, MapSlot};
use crate::shared::{CircleStyle, StrokeStyle};

/// Kartenoberfläche beider Karten inklusive ihrer Bedienelemente.
pub trait MapSurface {
    fn set_view(&mut self, slot: MapSlot, center: LatLng, zoom: i32);
    fn set_zoom(&mut self, slot: MapSlot, zoom: i32);
    fn add_polyline(&mut self, slot: MapSlot, layer: LayerId, points: &[LatLng], style: &StrokeStyle);
    fn set_polyline_points(&mut self, slot: MapSlot, layer: LayerId, points: &[LatLng]);
    fn add_circle_marker(
        &mut self,
        slot: MapSlot,
        layer: LayerId,
        center: LatLng,
        radius_px: f64,
        style: &CircleStyle,
    );
    fn remove_layer(&mut self, slot: MapSlot, layer: LayerId);
    /// Zeichenmodus-Anzeige (aktiver Button, Fadenkreuz-Cursor).
    fn set_draw_mode(&mut self, active: Option<MapSlot>);
    fn set_close_range(&mut self, slot: MapSlot, within: bool);
    fn set_clear_button_visible(&mut self, slot: MapSlot, visible: bool);
    fn set_copy_button(&mut self, label: &str, copied: bool);
}

/// Kurze Hinweise an den Benutzer.
pub trait Notifier {
    fn notify(&mut self, text: &str);
    /// Bietet eine URL zum manuellen Kopieren an (Zwischenablage fehlgeschlagen).
    fn show_manual_copy(&mut self, url: &str);
}

/// Zwischenablage; das Ergebnis meldet der Host als Intent zurück.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Adresszeile ohne neuen History-Eintrag.
pub trait PageLocation {
    fn replace_query(&mut self, url: &str);
    fn replace_fragment(&mut self, url: &str);
}

/// Einmal-Timer; Ablauf kommt als `TimerElapsed` zurück.
pub trait Scheduler {
    fn schedule(&mut self, timer: TimerId, delay_ms: u64);
    fn cancel(&mut self, timer: TimerId);
}

/// Vollständiger Host aus allen Kollaborateuren.
pub trait Host: MapSurface + Notifier + Clipboard + PageLocation + Scheduler {}

impl<T> Host for T where T: MapSurface + Notifier + Clipboard + PageLocation + Scheduler {}

/// Führt Effekte in Reihenfolge auf dem Host aus.
pub fn dispatch_effects<H: Host + ?Sized>(host: &mut H, effects: &[AppEffect]) {
    for effect in effects {
        dispatch_effect(host, effect);
    }
}

fn dispatch_effect<H: Host + ?Sized>(host: &mut H, effect: &AppEffect) {
    match effect {
        AppEffect::SetView { slot, center, zoom } => host.set_view(*slot, *center, *zoom),
        AppEffect::SetMapZoom { slot, zoom } => host.set_zoom(*slot, *zoom),
        AppEffect::AddPolyline {
            slot,
            layer,
            points,
            style,
        } => host.add_polyline(*slot, *layer, points, style),
        AppEffect::SetPolylinePoints {
            slot,
            layer,
            points,
        } => host.set_polyline_points(*slot, *layer, points),
        AppEffect::AddCircleMarker {
            slot,
            layer,
            center,
            radius_px,
            style,
        } => host.add_circle_marker(*slot, *layer, *center, *radius_px, style),
        AppEffect::RemoveLayer { slot, layer } => host.remove_layer(*slot, *layer),
        AppEffect::SetDrawMode { active } => host.set_draw_mode(*active),
        AppEffect::SetCloseRange { slot, within } => host.set_close_range(*slot, *within),
        AppEffect::SetClearButtonVisible { slot, visible } => {
            host.set_clear_button_visible(*slot, *visible)
        }
        AppEffect::SetCopyButton { label, copied } => host.set_copy_button(label, *copied),
        AppEffect::ReplaceQuery { url } => host.replace_query(url),
        AppEffect::ReplaceFragment { url } => host.replace_fragment(url),
        AppEffect::Notify { text } => host.notify(text),
        AppEffect::WriteClipboard { text } => host.write_text(text),
        AppEffect::ShowManualCopy { url } => host.show_manual_copy(url),
        AppEffect::ScheduleTimer { timer, delay_ms } => host.schedule(*timer, *delay_ms),
        AppEffect::CancelTimer { timer } => host.cancel(*timer),
    }
}
