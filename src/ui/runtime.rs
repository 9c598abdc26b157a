//! Terminal runtime and event loop.

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

use super::app::{App, PickOutcome};

/// Construct an [`App`] over the provided glyph list and run it to
/// completion.
pub fn run(glyphs: Vec<String>) -> Result<PickOutcome> {
	let mut app = App::new(glyphs);
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits with an outcome.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<PickOutcome> {
		terminal.clear()?;

		// No resize event arrives on attach; seed the viewport so the first
		// frame already renders the real layout.
		let size = terminal.size()?;
		self.set_viewport(size.width, size.height);

		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if let Some(outcome) = self.handle_event(&event::read()?) {
				return Ok(outcome);
			}
		}
	}
}
