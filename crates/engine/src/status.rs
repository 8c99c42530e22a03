//! Cursor status readout.

use std::fmt;

/// What the status bar shows for the cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusReadout {
	/// The cursor is outside every span, or there are no spans.
	#[default]
	Hidden,
	/// The cursor is inside the span labelled `label`.
	Scope { prefix: &'static str, label: String },
}

impl StatusReadout {
	pub fn is_hidden(&self) -> bool {
		matches!(self, Self::Hidden)
	}
}

impl fmt::Display for StatusReadout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Hidden => Ok(()),
			Self::Scope { prefix, label } => write!(f, "{prefix}: {label}"),
		}
	}
}
