use ratatui::style::{Color, Modifier, Style};

/// Styles applied across the two panes.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Pane header labels.
	pub header: Style,
	/// Selected glyphs, in both panes.
	pub selected: Style,
	/// De-emphasized text: code-point tags, placeholders, the key legend.
	pub dim: Style,
	/// Cursor markers in the list pane.
	pub cursor: Style,
	/// Pane borders.
	pub border: Style,
}

/// Default palette on the 256-color cube.
pub const TERM256: Theme = Theme {
	header: Style::new()
		.fg(Color::Indexed(99))
		.add_modifier(Modifier::BOLD),
	selected: Style::new()
		.fg(Color::Indexed(120))
		.add_modifier(Modifier::BOLD),
	dim: Style::new().fg(Color::Indexed(240)),
	cursor: Style::new().add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Indexed(240)),
};

/// Return the theme used when no other is configured.
#[must_use]
pub fn default_theme() -> Theme {
	TERM256
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
