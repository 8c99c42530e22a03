//! Marker tokenizer.
//!
//! [`Tokens`] walks every non-overlapping match of a grammar's pattern from
//! the start of the text. All scan state (regex position, guard state, the
//! byte-to-char cursor) belongs to one iterator, so scans never interfere.

use legato_primitives::{CharIdx, CharLen};
use regex::CaptureMatches;

use crate::grammar::{Closing, DelimiterGuard, Grammar};

/// Heading marker a delimiter must follow under [`DelimiterGuard::AfterHeading`].
const HEADING_MARKER: &str = "# ";

/// Subkind of a marker token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// Point marker of a grammar without explicit ends.
	Marker,
	/// Opening marker of an explicit-end grammar.
	Start,
	/// Closing marker of an explicit-end grammar.
	End,
}

/// One matched marker occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
	/// Character offset of the match.
	pub offset: CharIdx,
	/// Match length in characters.
	pub len: CharLen,
	/// Full matched text.
	pub text: &'t str,
	/// First capture group, when it participated and is non-empty.
	pub captured: Option<&'t str>,
	pub kind: TokenKind,
}

impl<'t> Token<'t> {
	/// Human-readable label: the capture if any, otherwise the matched text.
	pub fn label(&self) -> &'t str {
		self.captured.unwrap_or(self.text)
	}
}

/// Lazy token iterator for one grammar over one text.
pub struct Tokens<'t> {
	grammar: &'t Grammar,
	text: &'t str,
	matches: CaptureMatches<'t, 't>,
	heading_at: Option<usize>,
	seen_opening: bool,
	byte_cursor: usize,
	char_cursor: CharIdx,
}

impl<'t> Tokens<'t> {
	pub(crate) fn new(grammar: &'t Grammar, text: &'t str) -> Self {
		let heading_at = match grammar.guard() {
			DelimiterGuard::AfterHeading => text.find(HEADING_MARKER),
			_ => None,
		};
		Self {
			grammar,
			text,
			matches: grammar.pattern().captures_iter(text),
			heading_at,
			seen_opening: false,
			byte_cursor: 0,
			char_cursor: 0,
		}
	}

	/// Converts a byte offset into a character offset. Offsets must be
	/// visited in increasing order.
	fn char_offset(&mut self, byte: usize) -> CharIdx {
		self.char_cursor += self.text[self.byte_cursor..byte].chars().count();
		self.byte_cursor = byte;
		self.char_cursor
	}

	fn delimiter_allowed(&self, byte: usize) -> bool {
		match self.grammar.guard() {
			DelimiterGuard::Off => true,
			DelimiterGuard::AfterHeading => self
				.heading_at
				.is_some_and(|at| at + HEADING_MARKER.len() <= byte),
			DelimiterGuard::AfterOpening => self.seen_opening,
		}
	}
}

impl<'t> Iterator for Tokens<'t> {
	type Item = Token<'t>;

	fn next(&mut self) -> Option<Token<'t>> {
		loop {
			let caps = self.matches.next()?;
			let Some(whole) = caps.get(0) else {
				continue;
			};
			let group = caps.get(1);
			let opening = group.is_some();

			if opening {
				self.seen_opening = true;
			} else if self.grammar.closing() == Closing::PointMarkers
				&& !self.delimiter_allowed(whole.start())
			{
				tracing::trace!(
					grammar = %self.grammar.kind(),
					byte = whole.start(),
					"Suppressing guarded delimiter"
				);
				continue;
			}

			let kind = match (self.grammar.closing(), opening) {
				(Closing::PointMarkers, _) => TokenKind::Marker,
				(Closing::ExplicitEnd, true) => TokenKind::Start,
				(Closing::ExplicitEnd, false) => TokenKind::End,
			};

			return Some(Token {
				offset: self.char_offset(whole.start()),
				len: whole.as_str().chars().count(),
				text: whole.as_str(),
				captured: group.map(|g| g.as_str()).filter(|s| !s.is_empty()),
				kind,
			});
		}
	}
}

/// Collects every token of `grammar` in `text`, in document order.
pub fn tokenize<'t>(text: &'t str, grammar: &'t Grammar) -> Vec<Token<'t>> {
	let tokens: Vec<_> = grammar.tokens(text).collect();
	tracing::trace!(grammar = %grammar.kind(), count = tokens.len(), "Tokenized document");
	tokens
}
