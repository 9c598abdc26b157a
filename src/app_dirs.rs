//! Resolve the on-disk location of the glyph cache.
//!
//! The cache lives at a fixed path relative to the user's home directory,
//! which is looked up through the `directories` crate rather than by reading
//! `$HOME` directly.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::BaseDirs;

/// Location of the Nerd Fonts glyph list, relative to the home directory.
const CACHE_RELATIVE_PATH: &str = ".cache/nerdfonts/icons-list.txt";

/// Return the path of the glyph cache file.
pub fn glyph_cache_path() -> Result<PathBuf> {
	let dirs =
		BaseDirs::new().ok_or_else(|| anyhow!("unable to determine the user's home directory"))?;
	Ok(dirs.home_dir().join(CACHE_RELATIVE_PATH))
}
