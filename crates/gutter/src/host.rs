//! Host surface boundary for visual marks.

use legato_config::SettingsSource;
use legato_primitives::LineRange;

use crate::icon::IconImage;

/// Identity of a host editor surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// How the host scales an icon into the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSizing {
	/// Host picks the size.
	#[default]
	Auto,
	/// Scale to fit inside the gutter cell.
	Contain,
	/// Scale to fill the gutter cell.
	Cover,
}

impl IconSizing {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Auto => "auto",
			Self::Contain => "contain",
			Self::Cover => "cover",
		}
	}
}

/// A line range a mark is applied to, with its hover text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkRange {
	pub lines: LineRange,
	pub hover: String,
}

/// The part of the host editor that renders gutter marks.
///
/// Mark handles are opaque to the engine; every handle returned by
/// [`create_mark`](Self::create_mark) is eventually passed back to
/// [`release_mark`](Self::release_mark) exactly once.
pub trait GutterHost: SettingsSource {
	type Mark;

	/// The surface currently showing a document, if any.
	fn active_surface(&self) -> Option<SurfaceId>;

	/// Whether the active document is a file type the engine decorates.
	fn is_recognized_file_type(&self) -> bool;

	/// Creates a reusable mark style from an icon.
	fn create_mark(&mut self, icon: &IconImage, sizing: IconSizing) -> Self::Mark;

	/// Renders `mark` over `ranges` on the active surface.
	fn apply_mark(&mut self, mark: &Self::Mark, ranges: &[MarkRange]);

	/// Removes `mark` and everything rendered with it.
	fn release_mark(&mut self, mark: Self::Mark);
}
