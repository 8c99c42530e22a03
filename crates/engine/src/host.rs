//! Editor boundary consumed by the engine.

use legato_gutter::GutterHost;
use legato_primitives::{CharIdx, LineIdx, LineIndex};

use crate::status::StatusReadout;

/// Identity of a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// Everything the engine reads from or publishes to the host editor.
pub trait EditorHost: GutterHost {
	/// The document shown in the active surface.
	fn active_document(&self) -> Option<DocumentId>;

	/// Display name of the active document, used for logging.
	fn document_name(&self) -> String;

	/// Full text of the active document.
	fn document_text(&self) -> Option<String>;

	/// Line containing character `offset` of the active document.
	fn offset_to_line(&self, offset: CharIdx) -> LineIdx;

	/// Number of lines in the active document.
	fn line_count(&self) -> usize;

	/// Line of the primary cursor in the active surface.
	fn cursor_line(&self) -> Option<LineIdx>;

	fn publish_status(&mut self, status: &StatusReadout);
}

/// Line lookups over the host's active document.
pub(crate) struct HostLines<'h, H: ?Sized>(pub &'h H);

impl<H: EditorHost + ?Sized> LineIndex for HostLines<'_, H> {
	fn line_of(&self, offset: CharIdx) -> LineIdx {
		self.0.offset_to_line(offset)
	}

	fn line_count(&self) -> usize {
		self.0.line_count()
	}
}
