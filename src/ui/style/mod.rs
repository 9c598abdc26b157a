//! Visual styling for the picker.
//!
//! Themes are immutable bundles of [`ratatui`] styles handed to the render
//! path; nothing mutates them once the session starts.

mod theme;

pub use theme::{Theme, default_theme};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}
