//! Per-color icon cache.

use std::sync::Arc;

use legato_config::DisplayConfig;
use legato_primitives::Color;
use rustc_hash::FxHashMap;

use crate::icon::{IconImage, IconKind};

/// Rendered icons keyed by color and kind, valid for one [`DisplayConfig`].
///
/// Looking up an icon with a different config than the cached generation
/// drops every cached icon first.
#[derive(Debug, Default)]
pub struct IconCache {
	config: Option<DisplayConfig>,
	icons: FxHashMap<(Color, IconKind), Arc<IconImage>>,
}

impl IconCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the `kind` icon for `color` under `config`, rendering it on a
	/// miss.
	pub fn get_or_render(&mut self, color: Color, kind: IconKind, config: &DisplayConfig) -> Arc<IconImage> {
		if self.config.as_ref() != Some(config) {
			if !self.icons.is_empty() {
				tracing::trace!(dropped = self.icons.len(), "Display settings changed, dropping cached icons");
			}
			self.icons.clear();
			self.config = Some(*config);
		}

		self.icons
			.entry((color, kind))
			.or_insert_with(|| Arc::new(IconImage::render(color, kind, config)))
			.clone()
	}

	pub fn len(&self) -> usize {
		self.icons.len()
	}

	pub fn is_empty(&self) -> bool {
		self.icons.is_empty()
	}

	pub fn clear(&mut self) {
		self.icons.clear();
		self.config = None;
	}
}
