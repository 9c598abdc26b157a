//! Two-pane rendering for the picker.
//!
//! Rendering is a pure function of the session state: the selection pane on
//! the left keeps a fixed width, while the glyph list on the right hugs its
//! content and scrolls a cursor-centered window over the full list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Wrap};

use super::app::App;
use super::components::{PANE_CHROME_COLS, build_glyph_lines, pane_block};

/// Total width of the selection pane, border and padding included.
pub(crate) const LEFT_PANE_WIDTH: u16 = 24;
/// Columns between the two panes.
pub(crate) const PANE_GAP: u16 = 2;
/// Rows consumed by a pane's chrome: border, padding, header line, spacer.
pub(crate) const CHROME_ROWS: u16 = 6;

/// Number of glyph rows that fit in a viewport of `height` rows.
pub(crate) fn list_rows(height: u16) -> usize {
	usize::from(height.saturating_sub(CHROME_ROWS)).max(1)
}

/// Visible window `[start, end)` over a `len`-item list, centered on
/// `cursor`.
///
/// Near either boundary the window slides instead of shrinking; it is only
/// shorter than `rows` when the whole list is.
pub(crate) fn visible_window(cursor: usize, rows: usize, len: usize) -> (usize, usize) {
	let mut start = cursor.saturating_sub(rows / 2);
	let mut end = start + rows;
	if end > len {
		end = len;
		start = end.saturating_sub(rows);
	}
	(start, end)
}

impl App {
	/// Render the current state into `frame`.
	pub(crate) fn draw(&self, frame: &mut Frame) {
		let theme = &self.style.theme;

		let Some(viewport) = self.viewport else {
			let placeholder = Paragraph::new(self.ui.loading_label.as_str()).style(theme.dim);
			frame.render_widget(placeholder, frame.area());
			return;
		};

		let rows = list_rows(viewport.height);
		let window = visible_window(self.cursor, rows, self.glyphs.len());

		let mut list_lines: Vec<Line> = vec![
			Line::styled(self.ui.list_title.as_str(), theme.header),
			Line::default(),
		];
		list_lines.extend(build_glyph_lines(
			&self.glyphs,
			window,
			self.cursor,
			&self.selected,
			theme,
		));

		let content_width = list_lines.iter().map(Line::width).max().unwrap_or(0) as u16;
		let available = viewport.width.saturating_sub(LEFT_PANE_WIDTH + PANE_GAP);
		let list_width = (content_width + PANE_CHROME_COLS).min(available);

		let [selected_area, _, list_area] = Layout::horizontal([
			Constraint::Length(LEFT_PANE_WIDTH),
			Constraint::Length(PANE_GAP),
			Constraint::Length(list_width),
		])
		.areas(frame.area());

		let selected = Paragraph::new(Text::from(self.selected_pane_lines()))
			.wrap(Wrap { trim: false })
			.block(pane_block(theme));
		frame.render_widget(selected, selected_area);

		let list = Paragraph::new(Text::from(list_lines)).block(pane_block(theme));
		frame.render_widget(list, list_area);
	}

	fn selected_pane_lines(&self) -> Vec<Line<'_>> {
		let theme = &self.style.theme;
		let chosen = self.selected_glyphs();

		let body = if chosen.is_empty() {
			Line::styled(self.ui.empty_label.as_str(), theme.dim)
		} else {
			Line::styled(chosen.join(" "), theme.selected)
		};

		vec![
			Line::styled(self.ui.selected_title.as_str(), theme.header),
			Line::default(),
			body,
			Line::default(),
			Line::styled(self.ui.key_legend.as_str(), theme.dim),
		]
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;
	use ratatui::crossterm::event::Event;

	use super::*;

	fn sample_app() -> App {
		App::new(vec![
			"\u{3b1}".to_string(),
			"\u{3b2}".to_string(),
			"\u{3b3}".to_string(),
		])
	}

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line);
		}
		lines.join("\n")
	}

	fn draw_to_string(app: &App, width: u16, height: u16) -> String {
		let backend = TestBackend::new(width, height);
		let mut terminal = Terminal::new(backend).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw frame");
		buffer_to_string(terminal.backend().buffer())
	}

	#[test]
	fn placeholder_renders_before_the_first_resize() {
		let app = sample_app();
		let screen = draw_to_string(&app, 60, 20);

		assert!(screen.contains("Loading glyphs..."));
		assert!(!screen.contains("Glyphs"));
	}

	#[test]
	fn both_panes_render_once_the_viewport_is_known() {
		let mut app = sample_app();
		app.handle_event(&Event::Resize(60, 20));
		let screen = draw_to_string(&app, 60, 20);

		assert!(screen.contains("Selected"));
		assert!(screen.contains("Glyphs"));
		assert!(screen.contains("(none)"));
		assert!(screen.contains("\u{25b6} \u{3b1}"));
		assert!(screen.contains("U+03B1"));
	}

	#[test]
	fn selection_shows_up_in_both_panes() {
		let mut app = sample_app();
		app.handle_event(&Event::Resize(60, 20));
		app.cursor = 1;
		app.toggle_selected();
		app.cursor = 2;

		let screen = draw_to_string(&app, 60, 20);
		assert!(screen.contains("\u{2713} \u{3b2}"));
		assert!(screen.contains("\u{25b6} \u{3b3}"));
		assert!(!screen.contains("(none)"));
	}

	#[test]
	fn cursor_on_a_selected_row_gets_the_combined_marker() {
		let mut app = sample_app();
		app.handle_event(&Event::Resize(60, 20));
		app.toggle_selected();

		let screen = draw_to_string(&app, 60, 20);
		assert!(screen.contains("\u{25cf} \u{3b1}"));
	}

	#[test]
	fn tiny_viewports_render_without_panicking() {
		let mut app = sample_app();
		app.handle_event(&Event::Resize(40, 4));

		// Border and padding swallow the inner area at this height; the
		// window math still yields one row and the draw stays total.
		let screen = draw_to_string(&app, 40, 4);
		assert!(screen.contains("\u{256d}"));
	}

	#[test]
	fn empty_lists_render_without_rows() {
		let mut app = App::new(Vec::new());
		app.handle_event(&Event::Resize(60, 20));

		let screen = draw_to_string(&app, 60, 20);
		assert!(screen.contains("Glyphs"));
		assert!(screen.contains("(none)"));
		assert!(!screen.contains("\u{25b6}"));
	}

	#[test]
	fn chrome_allowance_clamps_to_one_row() {
		assert_eq!(list_rows(3), 1);
		assert_eq!(list_rows(CHROME_ROWS), 1);
		assert_eq!(list_rows(20), 14);
	}

	#[test]
	fn window_always_contains_the_cursor() {
		for len in [1usize, 5, 50] {
			for rows in [1usize, 3, 10] {
				for cursor in 0..len {
					let (start, end) = visible_window(cursor, rows, len);
					assert!(start <= cursor && cursor < end, "cursor {cursor} outside [{start}, {end})");
					assert_eq!(end - start, rows.min(len));
				}
			}
		}
	}

	#[test]
	fn window_slides_at_the_boundaries() {
		assert_eq!(visible_window(0, 5, 50), (0, 5));
		assert_eq!(visible_window(49, 5, 50), (45, 50));
		assert_eq!(visible_window(25, 5, 50), (23, 28));
	}

	#[test]
	fn short_lists_fill_the_window_from_the_top() {
		assert_eq!(visible_window(2, 10, 3), (0, 3));
	}
}
