//! In-memory editor host for engine tests.

use std::cell::Cell;

use legato_config::{Setting, SettingsSource};
use legato_gutter::{GutterHost, IconImage, IconSizing, MarkRange, SurfaceId};
use legato_primitives::{CharIdx, LineIdx, LineIndex, Rope};

use crate::host::{DocumentId, EditorHost};
use crate::status::StatusReadout;

pub(crate) const DOC: DocumentId = DocumentId(1);
pub(crate) const SURFACE: SurfaceId = SurfaceId(1);

/// Records every mark and status call made by the engine.
#[derive(Debug)]
pub(crate) struct MockHost {
	pub document: Option<DocumentId>,
	pub name: String,
	pub surface: Option<SurfaceId>,
	pub recognized: bool,
	pub cursor: Option<LineIdx>,
	pub created: Vec<u32>,
	pub released: Vec<u32>,
	pub applied: Vec<(u32, Vec<MarkRange>)>,
	pub statuses: Vec<StatusReadout>,
	/// Number of times the document text was read.
	pub text_reads: Cell<usize>,
	text: String,
	rope: Rope,
	next_mark: u32,
}

impl MockHost {
	/// An active, recognized Markdown document on [`SURFACE`].
	pub fn markdown(text: &str) -> Self {
		Self {
			document: Some(DOC),
			name: "quickstart.md".to_string(),
			surface: Some(SURFACE),
			recognized: true,
			cursor: None,
			created: Vec::new(),
			released: Vec::new(),
			applied: Vec::new(),
			statuses: Vec::new(),
			text_reads: Cell::new(0),
			text: text.to_string(),
			rope: Rope::from(text),
			next_mark: 0,
		}
	}

	pub fn set_text(&mut self, text: &str) {
		self.text = text.to_string();
		self.rope = Rope::from(text);
	}

	/// Marks created and not yet released.
	pub fn live_marks(&self) -> Vec<u32> {
		self.created
			.iter()
			.copied()
			.filter(|mark| !self.released.contains(mark))
			.collect()
	}

	/// The last published status as the status bar would render it.
	pub fn status_text(&self) -> String {
		self.statuses.last().map(ToString::to_string).unwrap_or_default()
	}

	/// Hover labels of every applied range, in application order.
	pub fn applied_labels(&self) -> Vec<String> {
		self.applied
			.iter()
			.flat_map(|(_, ranges)| ranges.iter().map(|range| range.hover.clone()))
			.collect()
	}
}

impl SettingsSource for MockHost {
	fn read_setting(&self, _setting: Setting, default: f64) -> f64 {
		default
	}
}

impl GutterHost for MockHost {
	type Mark = u32;

	fn active_surface(&self) -> Option<SurfaceId> {
		self.surface
	}

	fn is_recognized_file_type(&self) -> bool {
		self.recognized
	}

	fn create_mark(&mut self, _icon: &IconImage, _sizing: IconSizing) -> u32 {
		let mark = self.next_mark;
		self.next_mark += 1;
		self.created.push(mark);
		mark
	}

	fn apply_mark(&mut self, mark: &u32, ranges: &[MarkRange]) {
		self.applied.push((*mark, ranges.to_vec()));
	}

	fn release_mark(&mut self, mark: u32) {
		self.released.push(mark);
	}
}

impl EditorHost for MockHost {
	fn active_document(&self) -> Option<DocumentId> {
		self.document
	}

	fn document_name(&self) -> String {
		self.name.clone()
	}

	fn document_text(&self) -> Option<String> {
		self.text_reads.set(self.text_reads.get() + 1);
		self.document.map(|_| self.text.clone())
	}

	fn offset_to_line(&self, offset: CharIdx) -> LineIdx {
		self.rope.line_of(offset)
	}

	fn line_count(&self) -> usize {
		LineIndex::line_count(&self.rope)
	}

	fn cursor_line(&self) -> Option<LineIdx> {
		self.cursor
	}

	fn publish_status(&mut self, status: &StatusReadout) {
		self.statuses.push(status.clone());
	}
}
