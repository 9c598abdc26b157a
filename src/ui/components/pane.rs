use ratatui::symbols;
use ratatui::widgets::{Block, Borders, Padding};

use crate::ui::style::Theme;

/// Columns consumed by a pane's border and padding.
pub(crate) const PANE_CHROME_COLS: u16 = 4;

/// Uniform bordered frame shared by both panes.
pub(crate) fn pane_block(theme: &Theme) -> Block<'static> {
	Block::default()
		.borders(Borders::ALL)
		.border_set(symbols::border::ROUNDED)
		.border_style(theme.border)
		.padding(Padding::uniform(1))
}
