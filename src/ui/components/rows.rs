//! Row construction for the glyph list pane.

use std::collections::HashSet;

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

/// Marker for the row under the cursor when it is also selected.
const MARK_CURSOR_SELECTED: &str = "\u{25cf} ";
/// Marker for the row under the cursor.
const MARK_CURSOR: &str = "\u{25b6} ";
/// Marker for selected rows away from the cursor.
const MARK_SELECTED: &str = "\u{2713} ";
const MARK_PLAIN: &str = "  ";

/// Display column reserved for the glyph itself; wide glyphs eat into the
/// following gap so the code-point tags stay aligned.
const GLYPH_CELL_WIDTH: usize = 2;

/// Hexadecimal code-point tag for a glyph's first character.
#[must_use]
pub(crate) fn code_point_tag(glyph: &str) -> String {
	match glyph.chars().next() {
		Some(ch) => format!("U+{:04X}", u32::from(ch)),
		None => String::new(),
	}
}

/// Build the visible rows of the glyph list.
pub(crate) fn build_glyph_lines<'a>(
	glyphs: &'a [String],
	window: (usize, usize),
	cursor: usize,
	selected: &HashSet<usize>,
	theme: &Theme,
) -> Vec<Line<'a>> {
	let (start, end) = window;
	let visible = glyphs.get(start..end).unwrap_or_default();

	visible
		.iter()
		.enumerate()
		.map(|(offset, glyph)| {
			let index = start + offset;
			let is_cursor = index == cursor;
			let is_selected = selected.contains(&index);

			let marker = match (is_cursor, is_selected) {
				(true, true) => Span::styled(MARK_CURSOR_SELECTED, theme.cursor),
				(true, false) => Span::styled(MARK_CURSOR, theme.cursor),
				(false, true) => Span::styled(MARK_SELECTED, theme.selected),
				(false, false) => Span::raw(MARK_PLAIN),
			};
			let glyph_style = if is_selected { theme.selected } else { theme.dim };
			let gap = GLYPH_CELL_WIDTH.saturating_sub(glyph.width()) + 1;

			Line::from(vec![
				marker,
				Span::styled(glyph.as_str(), glyph_style),
				Span::raw(" ".repeat(gap)),
				Span::styled(code_point_tag(glyph), theme.dim),
			])
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tag_uses_the_first_character() {
		assert_eq!(code_point_tag("\u{3b1}"), "U+03B1");
		assert_eq!(code_point_tag("ab"), "U+0061");
	}

	#[test]
	fn tag_pads_to_four_digits() {
		assert_eq!(code_point_tag("A"), "U+0041");
	}

	#[test]
	fn tag_keeps_wide_code_points_intact() {
		assert_eq!(code_point_tag("\u{1f600}"), "U+1F600");
	}

	#[test]
	fn every_row_state_gets_a_distinct_marker() {
		let glyphs: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
		let selected: HashSet<usize> = [0, 2].into_iter().collect();
		let theme = Theme::default();

		let lines = build_glyph_lines(&glyphs, (0, 4), 0, &selected, &theme);
		let markers: Vec<&str> = lines
			.iter()
			.map(|line| line.spans[0].content.as_ref())
			.collect();

		assert_eq!(
			markers,
			vec![MARK_CURSOR_SELECTED, MARK_PLAIN, MARK_SELECTED, MARK_PLAIN]
		);
	}

	#[test]
	fn out_of_range_windows_render_nothing() {
		let glyphs = vec!["a".to_string()];
		let theme = Theme::default();

		let lines = build_glyph_lines(&glyphs, (5, 9), 0, &HashSet::new(), &theme);
		assert!(lines.is_empty());
	}
}
