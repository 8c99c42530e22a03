//! Mark lifecycle: release the previous generation, then decorate.

use legato_config::DisplayConfig;
use legato_primitives::LineRange;
use legato_scope::Span;

use crate::cache::IconCache;
use crate::host::{GutterHost, IconSizing, MarkRange, SurfaceId};
use crate::icon::IconKind;

/// Why a pass creates no marks at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	/// No surface is active.
	NoSurface,
	/// The active document is not a recognized file type.
	Unrecognized,
}

/// Result of one [`DecorationApplicator::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
	/// Every span was decorated.
	Applied { spans: usize, marks: usize },
	/// Nothing was created.
	Skipped(SkipReason),
}

/// The surface a pass would decorate, or why it would decorate nothing.
///
/// Cheap enough to check before scanning the document.
pub fn decoration_target<H>(host: &H) -> Result<SurfaceId, SkipReason>
where
	H: GutterHost + ?Sized,
{
	let surface = host.active_surface().ok_or(SkipReason::NoSurface)?;
	if !host.is_recognized_file_type() {
		return Err(SkipReason::Unrecognized);
	}
	Ok(surface)
}

#[derive(Debug)]
struct HeldMark<M> {
	surface: SurfaceId,
	mark: M,
}

/// Owns the marks created for the current pass.
///
/// Each span gets a start mark on its first line and, when it covers more
/// than one line, a continuation mark over the rest.
#[derive(Debug)]
pub struct DecorationApplicator<M> {
	held: Vec<HeldMark<M>>,
	icons: IconCache,
	sizing: IconSizing,
}

impl<M> Default for DecorationApplicator<M> {
	fn default() -> Self {
		Self::new(IconSizing::default())
	}
}

impl<M> DecorationApplicator<M> {
	pub fn new(sizing: IconSizing) -> Self {
		Self {
			held: Vec::new(),
			icons: IconCache::new(),
			sizing,
		}
	}

	/// Number of marks currently owned.
	pub fn held(&self) -> usize {
		self.held.len()
	}

	pub fn icons(&self) -> &IconCache {
		&self.icons
	}

	/// Releases every owned mark. Returns how many were released.
	pub fn release_all<H>(&mut self, host: &mut H) -> usize
	where
		H: GutterHost<Mark = M> + ?Sized,
	{
		let released = self.held.len();
		for held in self.held.drain(..) {
			tracing::trace!(surface = held.surface.0, "Releasing gutter mark");
			host.release_mark(held.mark);
		}
		released
	}

	/// Replaces the current marks with marks for `spans`.
	///
	/// Previous marks are always released, even when the new pass ends up
	/// decorating nothing.
	pub fn apply<H>(&mut self, host: &mut H, spans: &[Span]) -> ApplyOutcome
	where
		H: GutterHost<Mark = M> + ?Sized,
	{
		self.release_all(host);

		let surface = match decoration_target(&*host) {
			Ok(surface) => surface,
			Err(reason) => return ApplyOutcome::Skipped(reason),
		};

		let config = DisplayConfig::read(&*host);
		for span in spans {
			let first = span.start_line();
			self.place(host, surface, span, IconKind::Start, LineRange::new(first, first + 1), &config);
			if span.lines.len() > 1 {
				let rest = LineRange::new(first + 1, span.lines.end);
				self.place(host, surface, span, IconKind::Continuation, rest, &config);
			}
		}

		ApplyOutcome::Applied {
			spans: spans.len(),
			marks: self.held.len(),
		}
	}

	fn place<H>(
		&mut self,
		host: &mut H,
		surface: SurfaceId,
		span: &Span,
		kind: IconKind,
		lines: LineRange,
		config: &DisplayConfig,
	) where
		H: GutterHost<Mark = M> + ?Sized,
	{
		let icon = self.icons.get_or_render(span.color, kind, config);
		let mark = host.create_mark(&icon, self.sizing);
		host.apply_mark(
			&mark,
			&[MarkRange {
				lines,
				hover: span.label.clone(),
			}],
		);
		self.held.push(HeldMark { surface, mark });
	}
}
