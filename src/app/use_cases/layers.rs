//! Layer-Hilfen: Linien (Kontur + Linie) anlegen, aktualisieren, entfernen.

use crate::app::effects::{AppEffect, EffectQueue, StrokeLayers};
use crate::core::{LatLng, MapSlot};
use crate::shared::StrokeStyle;

/// Stil-Paar einer Linie.
#[derive(Debug, Clone, Copy)]
pub struct StrokePair<'a> {
    /// Farbige Linie
    pub line: &'a StrokeStyle,
    /// Kontur darunter
    pub border: &'a StrokeStyle,
}

/// Legt Kontur und Linie als zwei neue Layer an.
pub fn add_stroke(
    queue: &mut EffectQueue,
    slot: MapSlot,
    points: &[LatLng],
    styles: StrokePair<'_>,
) -> StrokeLayers {
    let layers = StrokeLayers {
        border: queue.new_layer(),
        line: queue.new_layer(),
    };
    queue.emit(AppEffect::AddPolyline {
        slot,
        layer: layers.border,
        points: points.to_vec(),
        style: styles.border.clone(),
    });
    queue.emit(AppEffect::AddPolyline {
        slot,
        layer: layers.line,
        points: points.to_vec(),
        style: styles.line.clone(),
    });
    layers
}

/// Entfernt Kontur und Linie.
pub fn remove_stroke(queue: &mut EffectQueue, slot: MapSlot, layers: StrokeLayers) {
    queue.emit(AppEffect::RemoveLayer {
        slot,
        layer: layers.border,
    });
    queue.emit(AppEffect::RemoveLayer {
        slot,
        layer: layers.line,
    });
}

/// Legt die Linie beim ersten Aufruf an und aktualisiert danach nur die Punkte.
pub fn upsert_stroke(
    queue: &mut EffectQueue,
    slot: MapSlot,
    target: &mut Option<StrokeLayers>,
    points: &[LatLng],
    styles: StrokePair<'_>,
) {
    match *target {
        Some(layers) => {
            for layer in [layers.border, layers.line] {
                queue.emit(AppEffect::SetPolylinePoints {
                    slot,
                    layer,
                    points: points.to_vec(),
                });
            }
        }
        None => *target = Some(add_stroke(queue, slot, points, styles)),
    }
}

/// Entfernt eine optionale Linie und leert das Handle.
pub fn drop_stroke(queue: &mut EffectQueue, slot: MapSlot, target: &mut Option<StrokeLayers>) {
    if let Some(layers) = target.take() {
        remove_stroke(queue, slot, layers);
    }
}
