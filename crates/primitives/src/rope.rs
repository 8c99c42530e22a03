//! Offset-to-line mapping.

use ropey::{Rope, RopeSlice};

use crate::range::{CharIdx, LineIdx};

/// Maps character offsets onto 0-indexed lines of a document.
///
/// Hosts usually own the authoritative mapping; [`Rope`] implements it
/// directly for hosts that keep their text in a rope.
pub trait LineIndex {
	/// Returns the line containing the character at `offset`.
	///
	/// Offsets past the end of the text map to the last line.
	fn line_of(&self, offset: CharIdx) -> LineIdx;

	/// Returns the number of lines, including the empty line after a
	/// trailing newline. Always at least 1.
	fn line_count(&self) -> usize;

	/// Returns the final line of the document.
	fn last_line(&self) -> LineIdx {
		self.line_count().saturating_sub(1)
	}
}

impl LineIndex for RopeSlice<'_> {
	fn line_of(&self, offset: CharIdx) -> LineIdx {
		self.char_to_line(offset.min(self.len_chars()))
	}

	fn line_count(&self) -> usize {
		self.len_lines()
	}
}

impl LineIndex for Rope {
	fn line_of(&self, offset: CharIdx) -> LineIdx {
		self.slice(..).line_of(offset)
	}

	fn line_count(&self) -> usize {
		self.len_lines()
	}
}
