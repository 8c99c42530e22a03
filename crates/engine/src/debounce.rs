//! Trailing-edge debounce timer.
//!
//! The timer does not sleep on its own. Callers feed it the current time:
//! [`DebounceTimer::request`] (re)arms the deadline and
//! [`DebounceTimer::poll`] reports, exactly once, that the quiet window has
//! elapsed since the last request.

use std::time::{Duration, Instant};

/// Lifecycle of a [`DebounceTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
	/// No request pending.
	Idle,
	/// A request is pending and fires at `deadline` unless re-armed.
	Armed { deadline: Instant },
	/// The last pending request fired.
	Fired,
}

/// Cancellable single-shot timer restarted by every request.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
	quiet: Duration,
	state: DebounceState,
}

impl DebounceTimer {
	pub fn new(quiet: Duration) -> Self {
		Self {
			quiet,
			state: DebounceState::Idle,
		}
	}

	pub fn quiet_window(&self) -> Duration {
		self.quiet
	}

	pub fn state(&self) -> DebounceState {
		self.state
	}

	/// Arms the timer, replacing any pending deadline.
	pub fn request(&mut self, now: Instant) {
		if self.is_armed() {
			tracing::trace!("Re-arming debounce");
		}
		self.state = DebounceState::Armed {
			deadline: now + self.quiet,
		};
	}

	/// Returns true once when the armed deadline has passed.
	pub fn poll(&mut self, now: Instant) -> bool {
		match self.state {
			DebounceState::Armed { deadline } if now >= deadline => {
				self.state = DebounceState::Fired;
				true
			}
			_ => false,
		}
	}

	/// Drops any pending request.
	pub fn cancel(&mut self) {
		self.state = DebounceState::Idle;
	}

	pub fn deadline(&self) -> Option<Instant> {
		match self.state {
			DebounceState::Armed { deadline } => Some(deadline),
			_ => None,
		}
	}

	pub fn is_armed(&self) -> bool {
		matches!(self.state, DebounceState::Armed { .. })
	}
}
