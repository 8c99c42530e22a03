//! Span construction.
//!
//! Markers are points: a span starts on its marker's line and runs until the
//! line before the next marker, with the last span extending to the end of
//! the document. Grammars with explicit end markers close a span on the end
//! marker's line instead and leave the lines up to the next opener
//! uncovered.

use legato_primitives::{Color, LineIdx, LineIndex, LineRange};

use crate::grammar::Closing;
use crate::palette::Palette;
use crate::token::{Token, TokenKind};

/// A colored, labelled run of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
	pub lines: LineRange,
	/// Label of the defining token.
	pub label: String,
	pub color: Color,
}

impl Span {
	/// First line of the span.
	pub fn start_line(&self) -> LineIdx {
		self.lines.start
	}

	/// Last line of the span (inclusive).
	///
	/// A zero-length span reports its start line here but covers no line at
	/// all; check [`LineRange::is_empty`] on [`lines`](Self::lines) before
	/// treating `start_line..=end_line` as covered.
	pub fn end_line(&self) -> LineIdx {
		self.lines.last()
	}

	pub fn contains(&self, line: LineIdx) -> bool {
		self.lines.contains(line)
	}
}

/// Builds ordered, non-overlapping spans from `tokens` and colors them by
/// position.
pub fn build_spans(
	tokens: &[Token<'_>],
	closing: Closing,
	lines: &impl LineIndex,
	palette: &Palette,
) -> Vec<Span> {
	let ranges = match closing {
		Closing::PointMarkers => point_ranges(tokens, lines),
		Closing::ExplicitEnd => explicit_end_ranges(tokens, lines),
	};

	ranges
		.into_iter()
		.enumerate()
		.map(|(index, (lines, label))| Span {
			lines,
			label: label.to_string(),
			color: palette.color_at(index),
		})
		.collect()
}

fn point_ranges<'t>(tokens: &[Token<'t>], lines: &impl LineIndex) -> Vec<(LineRange, &'t str)> {
	let doc_end = lines.last_line() + 1;
	tokens
		.iter()
		.enumerate()
		.map(|(i, token)| {
			let start = lines.line_of(token.offset);
			let end = tokens
				.get(i + 1)
				.map_or(doc_end, |next| lines.line_of(next.offset));
			(LineRange::new(start, end), token.label())
		})
		.collect()
}

fn explicit_end_ranges<'t>(
	tokens: &[Token<'t>],
	lines: &impl LineIndex,
) -> Vec<(LineRange, &'t str)> {
	let mut ranges: Vec<(LineRange, &'t str)> = Vec::new();
	let mut open: Option<(LineIdx, &'t str)> = None;

	for token in tokens {
		let line = lines.line_of(token.offset);
		match token.kind {
			TokenKind::End => {
				if let Some((start, label)) = open.take() {
					ranges.push((LineRange::inclusive(start, line), label));
				}
			}
			TokenKind::Start | TokenKind::Marker => {
				if let Some((start, label)) = open.take() {
					ranges.push((LineRange::new(start, line), label));
				}
				// An end marker sharing this line must not overlap the new span.
				if let Some((prev, _)) = ranges.last_mut()
					&& prev.end > line
				{
					*prev = LineRange::new(prev.start, line);
				}
				open = Some((line, token.label()));
			}
		}
	}

	if let Some((start, label)) = open {
		ranges.push((LineRange::new(start, lines.last_line() + 1), label));
	}
	ranges
}
