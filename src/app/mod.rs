//! Application-Layer: Controller, State, Events, Effekte und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod effects;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Karten, Linien, Session, UI).
pub mod state;
pub mod timers;
pub mod tools;
pub mod use_cases;

pub use command_log::{CommandLog, CommandRecord};
pub use controller::AppController;
pub use effects::{AppEffect, EffectQueue, LayerId, StrokeLayers};
pub use events::{AppCommand, AppIntent};
pub use state::{AnnotationState, AppState, CopyButtonState, UiState, ViewState};
pub use timers::{TimerId, TimerSlot};
