//! Events forwarded by the host.

use legato_gutter::SurfaceId;

use crate::host::DocumentId;

/// A change in the host editor the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
	/// A different document became active.
	ActiveDocumentChanged,
	/// The text of `document` changed. Ignored unless it is the active one.
	TextChanged { document: DocumentId },
	/// Focus moved to another surface, or to none.
	ActiveSurfaceChanged { surface: Option<SurfaceId> },
	/// The primary cursor moved.
	CursorMoved,
}

impl HostEvent {
	/// Whether the event can invalidate the current spans.
	pub const fn invalidates_spans(&self) -> bool {
		!matches!(self, Self::CursorMoved)
	}

	/// Whether the status readout must be refreshed right away.
	pub const fn refreshes_status(&self) -> bool {
		matches!(self, Self::CursorMoved | Self::ActiveSurfaceChanged { .. })
	}
}
