//! Marker grammars.
//!
//! A grammar pairs a context-free marker pattern with a [`DelimiterGuard`]
//! that decides which bare delimiters count as scope tokens. The guard is
//! stateful per scan, so it lives in the [`Tokens`] iterator rather than in
//! the pattern itself.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{Result, ScopeError};
use crate::token::Tokens;

/// Tab markers (`# [Label]`) or bare `---` delimiters ending a tab group.
const TABS_PATTERN: &str = r"(?mR)# \[(.*)\]|---$";

/// Zone pivot openers (`:::zone pivot="x"`) and `:::zone-end` closers.
const ZONES_PATTERN: &str = r#"(?i):::zone\s+pivot="([^"\r\n]*)"|:::zone-end"#;

/// Identity of a built-in grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarKind {
	/// Tabbed conceptual sections.
	Tabs,
	/// Conditional content zones.
	Zones,
}

impl GrammarKind {
	/// Returns the grammar's name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Tabs => "tabs",
			Self::Zones => "zones",
		}
	}
}

impl fmt::Display for GrammarKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// How a grammar's sections end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closing {
	/// Sections run until the next marker; markers carry no explicit end.
	PointMarkers,
	/// Sections open with a start marker and may close with an end marker.
	ExplicitEnd,
}

/// Filter applied to delimiter tokens (matches without a captured label).
///
/// Front matter blocks are fenced with the same `---` used to end a tab
/// group. The guard keeps only delimiters that follow a qualifying construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterGuard {
	/// Every delimiter is a token.
	Off,
	/// A delimiter counts only when a `# ` heading marker appears earlier in
	/// the text. A heading above the front matter still lets its fences
	/// through.
	#[default]
	AfterHeading,
	/// A delimiter counts only after the first labelled opening marker.
	AfterOpening,
}

impl DelimiterGuard {
	/// Returns the configuration name of this guard.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Off => "off",
			Self::AfterHeading => "after-heading",
			Self::AfterOpening => "after-opening",
		}
	}
}

impl FromStr for DelimiterGuard {
	type Err = ScopeError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"off" => Ok(Self::Off),
			"after-heading" => Ok(Self::AfterHeading),
			"after-opening" => Ok(Self::AfterOpening),
			other => Err(ScopeError::UnknownGuard(other.to_string())),
		}
	}
}

/// A named marker grammar.
#[derive(Debug, Clone)]
pub struct Grammar {
	kind: GrammarKind,
	pattern: Regex,
	closing: Closing,
	guard: DelimiterGuard,
	status_prefix: &'static str,
}

impl Grammar {
	/// Builds the tabs grammar with the given delimiter guard.
	pub fn tabs(guard: DelimiterGuard) -> Result<Self> {
		Ok(Self {
			kind: GrammarKind::Tabs,
			pattern: Regex::new(TABS_PATTERN)?,
			closing: Closing::PointMarkers,
			guard,
			status_prefix: "Tab",
		})
	}

	/// Builds the zones grammar.
	pub fn zones() -> Result<Self> {
		Ok(Self {
			kind: GrammarKind::Zones,
			pattern: Regex::new(ZONES_PATTERN)?,
			closing: Closing::ExplicitEnd,
			guard: DelimiterGuard::Off,
			status_prefix: "Zone",
		})
	}

	pub fn kind(&self) -> GrammarKind {
		self.kind
	}

	pub fn closing(&self) -> Closing {
		self.closing
	}

	pub fn guard(&self) -> DelimiterGuard {
		self.guard
	}

	/// Prefix shown in the status readout, e.g. `Tab`.
	pub fn status_prefix(&self) -> &'static str {
		self.status_prefix
	}

	pub(crate) fn pattern(&self) -> &Regex {
		&self.pattern
	}

	/// Returns a fresh, lazy token iterator over `text`.
	pub fn tokens<'t>(&'t self, text: &'t str) -> Tokens<'t> {
		Tokens::new(self, text)
	}

	/// Returns true if at least one token survives the delimiter guard.
	pub fn matches(&self, text: &str) -> bool {
		self.tokens(text).next().is_some()
	}
}

/// Grammars in selection priority order.
#[derive(Debug, Clone)]
pub struct GrammarRegistry {
	grammars: Vec<Grammar>,
}

impl GrammarRegistry {
	/// Creates a registry; earlier grammars win selection.
	pub fn new(grammars: Vec<Grammar>) -> Self {
		Self { grammars }
	}

	/// Built-in grammars: tabs first, then zones.
	pub fn builtin(guard: DelimiterGuard) -> Result<Self> {
		Ok(Self::new(vec![Grammar::tabs(guard)?, Grammar::zones()?]))
	}

	pub fn iter(&self) -> impl Iterator<Item = &Grammar> {
		self.grammars.iter()
	}

	/// Finds a grammar by kind.
	pub fn get(&self, kind: GrammarKind) -> Option<&Grammar> {
		self.grammars.iter().find(|g| g.kind == kind)
	}

	pub fn len(&self) -> usize {
		self.grammars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.grammars.is_empty()
	}
}
