//! Reusable pieces shared by the two panes.

mod pane;
mod rows;

pub(crate) use pane::{PANE_CHROME_COLS, pane_block};
pub(crate) use rows::build_glyph_lines;
