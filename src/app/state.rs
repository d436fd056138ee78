//! Anwendungszustand: zentrale Datenhaltung für Ansicht, Linien und UI.

mod annotations;
mod app_state;
mod ui;
mod view;

pub use annotations::AnnotationState;
pub use app_state::AppState;
pub use ui::{CopyButtonState, UiState};
pub use view::ViewState;
