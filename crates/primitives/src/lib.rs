//! Shared primitives for the scope gutter engine: line ranges, colors and
//! the offset-to-line mapping used to place tokens on lines.

/// RGB color identities used by palettes and gutter icons.
pub mod color;
/// Line-space ranges for spans and marks.
pub mod range;
/// Offset-to-line mapping over document text.
pub mod rope;

pub use color::{Color, ParseColorError};
pub use range::{CharIdx, CharLen, LineIdx, LineRange};
pub use rope::LineIndex;
pub use ropey::{Rope, RopeSlice};
