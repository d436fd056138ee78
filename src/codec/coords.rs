//! Koordinaten-Codec: Punkte ↔ Float32-Little-Endian-Werte.
//!
//! Verlustbehaftet: vor dem Packen wird auf 4 Nachkommastellen gerundet,
//! beim Entpacken wieder gerundet, sodass gerundete Punkte exakt überleben.

use crate::core::{round_coord, LatLng};

/// Bytes pro kodiertem Wert.
pub const VALUE_BYTES: usize = 4;

/// Bytes pro Punkt (lat + lng).
pub const POINT_BYTES: usize = 2 * VALUE_BYTES;

/// Hängt einen f32-Wert (LE) an den Puffer an.
pub fn push_value(out: &mut Vec<u8>, value: f32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Liest den f32-Wert an Wert-Index `index`, falls vorhanden.
pub fn read_value(bytes: &[u8], index: usize) -> Option<f32> {
    let start = index.checked_mul(VALUE_BYTES)?;
    let end = start.checked_add(VALUE_BYTES)?;
    let chunk = bytes.get(start..end)?;
    let raw: [u8; VALUE_BYTES] = chunk.try_into().ok()?;
    Some(f32::from_le_bytes(raw))
}

/// Rundet und packt einen Punkt.
pub fn push_point(out: &mut Vec<u8>, point: LatLng) {
    let rounded = point.rounded();
    push_value(out, rounded.lat as f32);
    push_value(out, rounded.lng as f32);
}

/// Entpackt den Punkt, der bei Wert-Index `index` beginnt.
pub fn read_point(bytes: &[u8], index: usize) -> Option<LatLng> {
    let lat = read_value(bytes, index)?;
    let lng = read_value(bytes, index.checked_add(1)?)?;
    Some(LatLng::new(
        round_coord(f64::from(lat)),
        round_coord(f64::from(lng)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_survives_pack_unpack_after_rounding() {
        let point = LatLng::new(42.963_44, -85.668_15);
        let mut buf = Vec::new();
        push_point(&mut buf, point);
        assert_eq!(buf.len(), POINT_BYTES);
        assert_eq!(read_point(&buf, 0), Some(point.rounded()));
    }

    #[test]
    fn test_values_are_little_endian() {
        let mut buf = Vec::new();
        push_value(&mut buf, 1.0);
        assert_eq!(buf, vec![0x00, 0x00, 0x80, 0x3f]);
    }

    #[test]
    fn test_read_out_of_bounds_is_none() {
        let mut buf = Vec::new();
        push_value(&mut buf, 1.0);
        assert!(read_value(&buf, 1).is_none());
        assert!(read_point(&buf, 0).is_none());
        assert!(read_value(&buf, usize::MAX).is_none());
    }

    #[test]
    fn test_extreme_coordinates_roundtrip() {
        for &(lat, lng) in &[(-89.9999, -179.9999), (89.9999, 179.9999), (0.0001, -0.0001)] {
            let mut buf = Vec::new();
            push_point(&mut buf, LatLng::new(lat, lng));
            assert_eq!(read_point(&buf, 0), Some(LatLng::new(lat, lng)));
        }
    }
}
