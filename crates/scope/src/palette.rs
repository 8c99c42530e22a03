//! Positional color palettes.

use legato_primitives::Color;

use crate::error::{Result, ScopeError};

/// A named palette color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
	pub name: String,
	pub color: Color,
}

impl PaletteEntry {
	pub fn new(name: impl Into<String>, color: Color) -> Self {
		Self {
			name: name.into(),
			color,
		}
	}
}

/// Ordered colors handed out by span position, wrapping around.
///
/// Coloring depends only on a span's index within one pass, never on its
/// label, so adjacent spans always differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	entries: Vec<PaletteEntry>,
}

impl Palette {
	/// Creates a palette; at least two colors are required.
	pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
		if entries.len() < 2 {
			return Err(ScopeError::PaletteTooSmall { len: entries.len() });
		}
		Ok(Self { entries })
	}

	/// Returns the entry for the span at `index`.
	pub fn entry_at(&self, index: usize) -> &PaletteEntry {
		&self.entries[index % self.entries.len()]
	}

	/// Returns the color for the span at `index`.
	pub fn color_at(&self, index: usize) -> Color {
		self.entry_at(index).color
	}

	pub fn entries(&self) -> &[PaletteEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			entries: vec![
				PaletteEntry::new("React Blue", Color::rgb(0x61, 0xda, 0xfb)),
				PaletteEntry::new("JavaScript Yellow", Color::rgb(0xf9, 0xe6, 0x4f)),
				PaletteEntry::new("Svelte Orange", Color::rgb(0xff, 0x3d, 0x00)),
				PaletteEntry::new("Vue Green", Color::rgb(0x42, 0xb8, 0x83)),
				PaletteEntry::new("Azure Blue", Color::rgb(0x00, 0x7f, 0xff)),
				PaletteEntry::new("Something Different", Color::rgb(0x83, 0x25, 0x61)),
			],
		}
	}
}
