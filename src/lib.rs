//! City Zoom Library.
//! Kern zweier synchronisierter Karten mit URL-kodierten Freihand-Annotationen,
//! als Library exportiert für Hosts, Tests und die CLI.

pub mod app;
pub mod codec;
pub mod core;
pub mod host;
pub mod location;
pub mod replay;
pub mod shared;

pub use app::{AppCommand, AppController, AppEffect, AppIntent, AppState, UiState, ViewState};
pub use codec::{decode_fragment, encode_fragment, FragmentDecode, FragmentFormat};
pub use core::{AnnotationSet, LatLng, MapSlot, MapView, Polyline};
pub use host::{dispatch_effects, HeadlessHost, HeadlessSession, Host};
pub use location::{PageUrl, ViewParams};
pub use shared::ViewerOptions;
