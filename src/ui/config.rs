//! Fixed UI text for the two panes.

/// Labels and legend text rendered around the picker panes.
///
/// The values are immutable for the lifetime of the session; there is no
/// flag or configuration-file surface that changes them.
#[derive(Debug, Clone)]
pub struct UiConfig {
	/// Title of the selection pane.
	pub selected_title: String,
	/// Title of the scrollable glyph list pane.
	pub list_title: String,
	/// Placeholder shown while no glyph is selected.
	pub empty_label: String,
	/// One-line key legend at the bottom of the selection pane.
	pub key_legend: String,
	/// Text shown before the first size notification arrives.
	pub loading_label: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			selected_title: "Selected".to_string(),
			list_title: "Glyphs".to_string(),
			empty_label: "(none)".to_string(),
			key_legend: "jk space \u{21b5} q".to_string(),
			loading_label: "Loading glyphs...".to_string(),
		}
	}
}
