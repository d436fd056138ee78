//! Fragment-Codec: Koordinaten-Packung, Binärformat und Alt-Formate.

pub mod binary;
pub mod coords;
pub mod fragment;
pub mod legacy_csv;
pub mod legacy_json;

pub use binary::{decode_binary, encode_binary, FORMAT_MAGIC, MAX_POINTS_PER_LINE};
pub use fragment::{decode_fragment, encode_fragment, FragmentDecode, FragmentFormat};
pub use legacy_csv::decode_legacy_csv;
pub use legacy_json::decode_legacy_json;
