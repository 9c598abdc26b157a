use anyhow::Result;
use glyp::{app_dirs, clipboard, icons, ui};

fn main() -> Result<()> {
	let path = app_dirs::glyph_cache_path()?;
	let glyphs = icons::load(&path)?;

	let outcome = ui::run(glyphs)?;

	// Clipboard hand-off is best effort; the session already ended cleanly.
	if let Some(text) = outcome.selection {
		let _ = clipboard::copy(&text);
	}

	Ok(())
}
