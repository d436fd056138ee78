//! Core-Domänentypen: Koordinaten, Annotationen, Kartenansicht.

pub mod annotation;
pub mod lat_lng;
pub mod map_view;

pub use annotation::{AnnotationSet, MapSlot, Polyline, MIN_POLYLINE_POINTS};
pub use lat_lng::{round_coord, LatLng, COORD_PRECISION};
pub use map_view::MapView;
