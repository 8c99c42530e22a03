//! Recomputation passes and cursor status.

use std::time::{Duration, Instant};

use legato_config::LegatoConfig;
use legato_gutter::{ApplyOutcome, DecorationApplicator, IconSizing, SkipReason, SurfaceId, decoration_target};
use legato_scope::{GrammarKind, GrammarRegistry, Palette, Span, build_spans, locate, tokenize};

use crate::debounce::DebounceTimer;
use crate::event::HostEvent;
use crate::host::{EditorHost, HostLines};
use crate::status::StatusReadout;

/// Construction parameters for an [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineOptions {
	pub registry: GrammarRegistry,
	pub palette: Palette,
	pub quiet_window: Duration,
	pub sizing: IconSizing,
}

impl EngineOptions {
	/// Builds the grammar registry and palette described by `config`.
	pub fn from_config(config: &LegatoConfig) -> legato_scope::Result<Self> {
		Ok(Self {
			registry: GrammarRegistry::builtin(config.delimiter_guard)?,
			palette: config.palette.clone(),
			quiet_window: config.quiet_window,
			sizing: IconSizing::default(),
		})
	}
}

/// Result of one recomputation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
	/// Spans were built and their marks applied.
	Decorated { grammar: GrammarKind, spans: usize },
	/// No document is active.
	NoDocument,
	/// No grammar matched the document text.
	NoGrammar,
	/// No surface is active.
	NoSurface,
	/// The active document is not a recognized file type.
	Unrecognized,
}

impl From<SkipReason> for PassOutcome {
	fn from(reason: SkipReason) -> Self {
		match reason {
			SkipReason::NoSurface => Self::NoSurface,
			SkipReason::Unrecognized => Self::Unrecognized,
		}
	}
}

/// Spans of the last successful pass and the surface they were built for.
#[derive(Debug)]
struct Scopes {
	surface: SurfaceId,
	prefix: &'static str,
	spans: Vec<Span>,
}

/// Owns all mutable engine state: held marks, the debounce timer, the last
/// span list and the published status.
#[derive(Debug)]
pub struct Engine<M> {
	registry: GrammarRegistry,
	palette: Palette,
	applicator: DecorationApplicator<M>,
	timer: DebounceTimer,
	scopes: Option<Scopes>,
	status: StatusReadout,
}

impl<M> Engine<M> {
	pub fn new(options: EngineOptions) -> Self {
		Self {
			registry: options.registry,
			palette: options.palette,
			applicator: DecorationApplicator::new(options.sizing),
			timer: DebounceTimer::new(options.quiet_window),
			scopes: None,
			status: StatusReadout::Hidden,
		}
	}

	pub fn from_config(config: &LegatoConfig) -> legato_scope::Result<Self> {
		Ok(Self::new(EngineOptions::from_config(config)?))
	}

	/// Reacts to a host event.
	///
	/// Document and surface changes only (re)arm the debounce timer; the
	/// recomputation itself runs from [`poll`](Self::poll). Cursor moves
	/// update the status immediately against the last span list.
	pub fn handle_event<H>(&mut self, host: &mut H, event: HostEvent, now: Instant)
	where
		H: EditorHost<Mark = M> + ?Sized,
	{
		if let HostEvent::TextChanged { document } = event
			&& host.active_document() != Some(document)
		{
			tracing::trace!(document = document.0, "Ignoring edit to inactive document");
			return;
		}
		if let HostEvent::ActiveSurfaceChanged { surface } = event {
			tracing::trace!(surface = surface.map(|s| s.0), "Active surface changed");
		}

		if event.invalidates_spans() {
			self.timer.request(now);
		}
		if event.refreshes_status() {
			self.update_status(host);
		}
	}

	/// Runs a pass if the quiet window has elapsed since the last request.
	pub fn poll<H>(&mut self, host: &mut H, now: Instant) -> Option<PassOutcome>
	where
		H: EditorHost<Mark = M> + ?Sized,
	{
		self.timer.poll(now).then(|| self.recompute(host))
	}

	/// Recomputes spans for the active document and redecorates it.
	///
	/// Previously held marks are released first on every path. The surface
	/// and file-type gates are checked before the document is scanned.
	pub fn recompute<H>(&mut self, host: &mut H) -> PassOutcome
	where
		H: EditorHost<Mark = M> + ?Sized,
	{
		self.scopes = None;

		if let Err(reason) = decoration_target(&*host) {
			self.applicator.release_all(host);
			self.update_status(host);
			tracing::debug!(?reason, "Skipping gutter pass");
			return reason.into();
		}

		let Some(text) = host.document_text() else {
			self.applicator.release_all(host);
			self.update_status(host);
			return PassOutcome::NoDocument;
		};
		tracing::debug!(document = %host.document_name(), "Decorating gutters");

		let grammar = self.registry.select(&text);
		let spans = match grammar {
			Some(grammar) => {
				let tokens = tokenize(&text, grammar);
				build_spans(&tokens, grammar.closing(), &HostLines(&*host), &self.palette)
			}
			None => Vec::new(),
		};

		let outcome = match (self.applicator.apply(host, &spans), grammar) {
			(ApplyOutcome::Skipped(reason), _) => reason.into(),
			(ApplyOutcome::Applied { .. }, None) => PassOutcome::NoGrammar,
			(ApplyOutcome::Applied { spans: count, .. }, Some(grammar)) => {
				if let Some(surface) = host.active_surface() {
					self.scopes = Some(Scopes {
						surface,
						prefix: grammar.status_prefix(),
						spans,
					});
				}
				PassOutcome::Decorated {
					grammar: grammar.kind(),
					spans: count,
				}
			}
		};

		tracing::debug!(?outcome, "Gutter pass finished");
		self.update_status(host);
		outcome
	}

	/// Publishes the status for the current cursor line.
	///
	/// Spans built for a surface other than the active one are not
	/// consulted.
	pub fn update_status<H>(&mut self, host: &mut H)
	where
		H: EditorHost<Mark = M> + ?Sized,
	{
		let readout = match (&self.scopes, host.active_surface(), host.cursor_line()) {
			(Some(scopes), Some(surface), Some(line)) if scopes.surface == surface => {
				locate(&scopes.spans, line).map_or(StatusReadout::Hidden, |span| StatusReadout::Scope {
					prefix: scopes.prefix,
					label: span.label.clone(),
				})
			}
			_ => StatusReadout::Hidden,
		};
		host.publish_status(&readout);
		self.status = readout;
	}

	/// Forgets the last spans and any pending request.
	///
	/// Held marks stay with the applicator and are released by the next
	/// pass or by [`dispose_all`](Self::dispose_all).
	pub fn reset(&mut self) {
		self.timer.cancel();
		self.scopes = None;
		self.status = StatusReadout::Hidden;
	}

	/// Cancels the timer, releases every mark and hides the status.
	pub fn dispose_all<H>(&mut self, host: &mut H)
	where
		H: EditorHost<Mark = M> + ?Sized,
	{
		self.reset();
		let released = self.applicator.release_all(host);
		host.publish_status(&StatusReadout::Hidden);
		tracing::debug!(released, "Disposed gutter engine");
	}

	/// Spans of the last successful pass.
	pub fn spans(&self) -> &[Span] {
		self.scopes.as_ref().map_or(&[][..], |scopes| scopes.spans.as_slice())
	}

	pub fn status(&self) -> &StatusReadout {
		&self.status
	}

	pub fn timer(&self) -> &DebounceTimer {
		&self.timer
	}

	/// When the pending request fires, if one is armed.
	///
	/// Hosts that sleep between ticks wait for this instant and then call
	/// [`poll`](Self::poll); see [`crate::driver`].
	pub fn deadline(&self) -> Option<Instant> {
		self.timer.deadline()
	}

	/// Number of marks currently held.
	pub fn held_marks(&self) -> usize {
		self.applicator.held()
	}
}

#[cfg(test)]
mod tests;
