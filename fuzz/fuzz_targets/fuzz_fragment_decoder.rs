#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let decoded = city_zoom::decode_fragment(raw);
        for line in [&decoded.annotations.line1, &decoded.annotations.line2]
            .into_iter()
            .flatten()
        {
            assert!(line.len() >= city_zoom::core::MIN_POLYLINE_POINTS);
        }
        let _ = city_zoom::encode_fragment(&decoded.annotations);
    }
});
