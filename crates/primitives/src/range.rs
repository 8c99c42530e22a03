/// A position in the text, measured in characters (not bytes).
///
/// This is the coordinate space tokens are reported in.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A 0-indexed line number.
pub type LineIdx = usize;

/// A half-open range of lines `[start, end)`.
///
/// An empty range still carries its `start` line: it is a zero-length range
/// anchored on that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
	/// First line of the range.
	pub start: LineIdx,
	/// One past the last line of the range.
	pub end: LineIdx,
}

impl LineRange {
	/// Creates a new range, clamping `end` so it is never before `start`.
	pub fn new(start: LineIdx, end: LineIdx) -> Self {
		Self {
			start,
			end: end.max(start),
		}
	}

	/// Creates a range from inclusive bounds.
	pub fn inclusive(first: LineIdx, last: LineIdx) -> Self {
		Self::new(first, last.saturating_add(1))
	}

	/// Creates a zero-length range anchored at `line`.
	pub fn anchored(line: LineIdx) -> Self {
		Self::new(line, line)
	}

	/// Returns the number of lines covered.
	#[inline]
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	/// Returns true if no line is covered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns the last covered line, or the anchor line for an empty range.
	#[inline]
	pub fn last(&self) -> LineIdx {
		if self.is_empty() { self.start } else { self.end - 1 }
	}

	/// Returns true if `line` is covered by this range.
	#[inline]
	pub fn contains(&self, line: LineIdx) -> bool {
		line >= self.start && line < self.end
	}

	/// Returns true if the two ranges share at least one line.
	///
	/// An empty range covers no line, so it never overlaps anything.
	pub fn overlaps(&self, other: &LineRange) -> bool {
		!self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
	}
}
