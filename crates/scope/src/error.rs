//! Error types for grammar and palette construction.

use thiserror::Error;

/// Errors raised while building grammars or palettes.
///
/// Scanning a document never fails; these only surface at setup time.
#[derive(Debug, Error)]
pub enum ScopeError {
	/// A marker pattern failed to compile.
	#[error("invalid marker pattern: {0}")]
	Pattern(#[from] regex::Error),

	/// Positional coloring needs at least two colors to keep neighbours apart.
	#[error("palette needs at least 2 colors, got {len}")]
	PaletteTooSmall {
		/// Number of colors supplied.
		len: usize,
	},

	/// A delimiter guard name was not recognized.
	#[error("unknown delimiter guard: {0} (expected 'off', 'after-heading' or 'after-opening')")]
	UnknownGuard(String),
}

/// Result type for scope setup operations.
pub type Result<T> = std::result::Result<T, ScopeError>;
