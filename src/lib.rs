//! Core crate exports for the `glyp` terminal glyph picker.
//!
//! The root module re-exports the UI entry points so that embedders can load
//! a glyph list and run the picker without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod clipboard;
pub mod icons;
pub mod ui;

pub use ui::style::{StyleConfig, Theme, default_theme};
pub use ui::{App, PickOutcome, UiConfig, run};
