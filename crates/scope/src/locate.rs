//! Cursor locator.

use legato_primitives::LineIdx;

use crate::span::Span;

/// Returns the first span covering `line`.
///
/// `None` when the cursor sits above the first span, below the last one, in
/// a gap between zones, or when there are no spans.
pub fn locate(spans: &[Span], line: LineIdx) -> Option<&Span> {
	spans.iter().find(|span| span.contains(line))
}
