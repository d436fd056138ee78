//! Binärformat (Version 1): Float32-LE-Container für beide Linien.
//!
//! Layout: `[magic=1.0, n1, n2, lat, lng, …]`, zuerst die `n1` Punkte von
//! Karte 1, danach die `n2` Punkte von Karte 2.

use super::coords::{push_point, push_value, read_point, read_value, POINT_BYTES, VALUE_BYTES};
use crate::core::{AnnotationSet, LatLng, MapSlot, Polyline};

/// Format-Marker im ersten Wert.
pub const FORMAT_MAGIC: f32 = 1.0;

/// Obergrenze für deklarierte Punktanzahlen pro Linie.
pub const MAX_POINTS_PER_LINE: usize = 10_000;

/// Anzahl Header-Werte (Magic + zwei Zähler).
const HEADER_VALUES: usize = 3;

/// Minimale gültige Pufferlänge in Bytes (Header + ein Wert).
pub const MIN_BINARY_LEN: usize = 16;

/// Punkte einer Linie, begrenzt auf das, was der Decoder je Slot liest.
fn capped_points(line: Option<&Polyline>) -> &[LatLng] {
    let points = line.map(Polyline::points).unwrap_or(&[]);
    if points.len() > MAX_POINTS_PER_LINE {
        log::warn!(
            "Linie mit {} Punkten auf {} gekürzt",
            points.len(),
            MAX_POINTS_PER_LINE
        );
    }
    &points[..points.len().min(MAX_POINTS_PER_LINE)]
}

/// Serialisiert beide Linien; `None`, wenn keine Linie vorhanden ist.
pub fn encode_binary(annotations: &AnnotationSet) -> Option<Vec<u8>> {
    let line1 = capped_points(annotations.line1.as_ref());
    let line2 = capped_points(annotations.line2.as_ref());
    if line1.is_empty() && line2.is_empty() {
        return None;
    }

    let mut out =
        Vec::with_capacity(HEADER_VALUES * VALUE_BYTES + (line1.len() + line2.len()) * POINT_BYTES);
    push_value(&mut out, FORMAT_MAGIC);
    push_value(&mut out, line1.len() as f32);
    push_value(&mut out, line2.len() as f32);
    for &point in line1.iter().chain(line2) {
        push_point(&mut out, point);
    }
    Some(out)
}

/// Liest einen deklarierten Zähler: Richtung 0 gekürzt, NaN → 0, begrenzt.
fn declared_count(value: f32) -> usize {
    // `as` sättigt und bildet NaN auf 0 ab
    (value as i64).clamp(0, MAX_POINTS_PER_LINE as i64) as usize
}

/// Deserialisiert einen Binär-Puffer.
///
/// `None` bei zu kurzem Puffer, falscher Ausrichtung oder falschem Magic.
/// Deklarierte Zähler, die über das Pufferende hinausgehen, werden
/// abgeschnitten statt abgelehnt.
pub fn decode_binary(bytes: &[u8]) -> Option<AnnotationSet> {
    if bytes.len() < MIN_BINARY_LEN || bytes.len() % VALUE_BYTES != 0 {
        return None;
    }
    if read_value(bytes, 0)? != FORMAT_MAGIC {
        return None;
    }

    let counts = [
        declared_count(read_value(bytes, 1)?),
        declared_count(read_value(bytes, 2)?),
    ];

    let mut annotations = AnnotationSet::new();
    let mut index = HEADER_VALUES;
    for slot in MapSlot::ALL {
        let mut points: Vec<LatLng> = Vec::new();
        for _ in 0..counts[slot.index()] {
            let Some(point) = read_point(bytes, index) else {
                break;
            };
            points.push(point);
            index += 2;
        }
        annotations.set(slot, Polyline::new(points));
    }
    Some(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: &[(f64, f64)]) -> Option<Polyline> {
        Polyline::new(raw.iter().map(|&p| LatLng::from(p)).collect())
    }

    fn header(magic: f32, n1: f32, n2: f32) -> Vec<u8> {
        let mut buf = Vec::new();
        push_value(&mut buf, magic);
        push_value(&mut buf, n1);
        push_value(&mut buf, n2);
        buf
    }

    #[test]
    fn test_encode_layout() {
        let set = AnnotationSet::from_lines(line(&[(42.0, -83.0), (42.1, -83.1)]), None);
        let bytes = encode_binary(&set).expect("Bytes erwartet");
        // 3 Header + 4 Koordinaten
        assert_eq!(bytes.len(), 7 * VALUE_BYTES);
        assert_eq!(read_value(&bytes, 0), Some(1.0));
        assert_eq!(read_value(&bytes, 1), Some(2.0));
        assert_eq!(read_value(&bytes, 2), Some(0.0));
    }

    #[test]
    fn test_encode_empty_is_none() {
        assert!(encode_binary(&AnnotationSet::new()).is_none());
    }

    #[test]
    fn test_roundtrip_both_lines() {
        let set = AnnotationSet::from_lines(
            line(&[(42.9634, -85.6681), (42.97, -85.66), (42.98, -85.65)]),
            line(&[(42.3314, -83.0458), (42.34, -83.05)]),
        );
        let bytes = encode_binary(&set).expect("Bytes erwartet");
        assert_eq!(decode_binary(&bytes), Some(set));
    }

    #[test]
    fn test_decode_rejects_short_misaligned_and_bad_magic() {
        assert!(decode_binary(&[0; 12]).is_none());
        assert!(decode_binary(&[0; 17]).is_none());

        let mut buf = header(2.0, 0.0, 0.0);
        push_value(&mut buf, 0.0);
        assert!(decode_binary(&buf).is_none());
    }

    #[test]
    fn test_decode_truncates_oversized_counts() {
        let mut buf = header(1.0, 1e9, 5.0);
        for &(lat, lng) in &[(1.0, 2.0), (3.0, 4.0)] {
            push_point(&mut buf, LatLng::new(lat, lng));
        }
        let set = decode_binary(&buf).expect("Set erwartet");
        assert_eq!(set.line1, line(&[(1.0, 2.0), (3.0, 4.0)]));
        assert!(set.line2.is_none());
    }

    #[test]
    fn test_decode_negative_and_nan_counts_are_zero() {
        let mut buf = header(1.0, f32::NAN, -3.0);
        push_point(&mut buf, LatLng::new(1.0, 2.0));
        let set = decode_binary(&buf).expect("Set erwartet");
        assert!(set.is_empty());
    }

    #[test]
    fn test_decode_fractional_count_truncates() {
        let mut buf = header(1.0, 0.0, 2.9);
        push_point(&mut buf, LatLng::new(1.0, 2.0));
        push_point(&mut buf, LatLng::new(3.0, 4.0));
        let set = decode_binary(&buf).expect("Set erwartet");
        assert!(set.line1.is_none());
        assert_eq!(set.line2, line(&[(1.0, 2.0), (3.0, 4.0)]));
    }

    #[test]
    fn test_decode_single_point_slot_is_absent() {
        let mut buf = header(1.0, 1.0, 2.0);
        push_point(&mut buf, LatLng::new(9.0, 9.0));
        push_point(&mut buf, LatLng::new(1.0, 2.0));
        push_point(&mut buf, LatLng::new(3.0, 4.0));
        let set = decode_binary(&buf).expect("Set erwartet");
        assert!(set.line1.is_none());
        assert_eq!(set.line2, line(&[(1.0, 2.0), (3.0, 4.0)]));
    }
}
