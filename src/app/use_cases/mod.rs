//! Use-Cases der Application-Layer-Orchestrierung.

pub mod clipboard;
pub mod drawing;
pub mod fragment;
pub mod layers;
pub mod page;
pub mod sync;
