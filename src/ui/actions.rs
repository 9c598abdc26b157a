//! Keyboard and resize event dispatch.

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, PickOutcome};

impl App {
	/// Advance the session by one terminal event.
	///
	/// Returns an outcome when the event ends the session; any event the
	/// picker does not recognize is a no-op.
	pub(crate) fn handle_event(&mut self, event: &Event) -> Option<PickOutcome> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
			Event::Resize(width, height) => {
				self.set_viewport(*width, *height);
				None
			}
			_ => None,
		}
	}

	/// Process a key press and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome> {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				Some(PickOutcome {
					accepted: false,
					selection: None,
				})
			}
			KeyCode::Char('q') | KeyCode::Esc => Some(PickOutcome {
				accepted: false,
				selection: None,
			}),
			KeyCode::Enter => Some(PickOutcome {
				accepted: true,
				selection: self.joined_selection(),
			}),
			KeyCode::Up | KeyCode::Char('k') => {
				self.move_up();
				None
			}
			KeyCode::Down | KeyCode::Char('j') => {
				self.move_down();
				None
			}
			KeyCode::Char('g') => {
				self.jump_to_top();
				None
			}
			KeyCode::Char('G') => {
				self.jump_to_bottom();
				None
			}
			KeyCode::Char(' ') | KeyCode::Tab => {
				self.toggle_selected();
				None
			}
			_ => None,
		}
	}
}
