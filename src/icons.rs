//! Loading of the glyph list.
//!
//! The cache file is plain UTF-8 text with one glyph per line. Lines are
//! trimmed and whitespace-only lines are dropped; the surviving entries keep
//! their file order, and their index becomes the stable identity used by the
//! picker for the lifetime of the session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The glyph cache could not be read.
#[derive(Debug, Error)]
#[error("failed to read glyph cache at {}", .path.display())]
pub struct LoadError {
	/// Path that was attempted.
	pub path: PathBuf,
	#[source]
	source: io::Error,
}

/// Read the glyph list from `path`, skipping blank lines.
pub fn load(path: &Path) -> Result<Vec<String>, LoadError> {
	let contents = fs::read_to_string(path).map_err(|source| LoadError {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_string)
		.collect())
}
