//! Tokio wake-ups for [`Engine`](crate::Engine) deadlines.
//!
//! The engine's [`DebounceTimer`](crate::DebounceTimer) stays the only
//! timer. After every [`handle_event`](crate::Engine::handle_event) the
//! host hands [`Engine::deadline`](crate::Engine::deadline) to
//! [`DebounceHandle::schedule`]; the driver sleeps until that instant and
//! calls `fire`, and the host then runs [`Engine::poll`](crate::Engine::poll).

use std::time::Instant as StdInstant;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

/// Handle to a task spawned by [`spawn_debounced`].
#[derive(Debug)]
pub struct DebounceHandle {
	deadlines: watch::Sender<Option<StdInstant>>,
	cancel: CancellationToken,
	task: JoinHandle<()>,
}

impl DebounceHandle {
	/// Replaces the deadline the driver waits for; `None` disarms it.
	///
	/// Returns false once the task has stopped.
	pub fn schedule(&self, deadline: Option<StdInstant>) -> bool {
		self.deadlines.send(deadline).is_ok()
	}

	/// Stops the task; a pending deadline never fires.
	pub fn cancel(&self) {
		self.cancel.cancel();
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	/// Cancels the task and waits for it to exit.
	///
	/// Returns false if the task panicked, e.g. inside `fire`.
	pub async fn shutdown(self) -> bool {
		self.cancel.cancel();
		match self.task.await {
			Ok(()) => true,
			Err(error) => {
				tracing::warn!(%error, "Debounce driver task failed");
				false
			}
		}
	}
}

/// Spawns a task that calls `fire` once each scheduled deadline passes.
///
/// A deadline fires at most once; scheduling a new one replaces it. The task
/// exits when `cancel` is triggered or the handle is dropped. Must be called
/// from within a tokio runtime.
pub fn spawn_debounced<F>(cancel: CancellationToken, mut fire: F) -> DebounceHandle
where
	F: FnMut() + Send + 'static,
{
	let (deadlines, mut rx) = watch::channel(None);
	let token = cancel.clone();

	let task = tokio::spawn(async move {
		let mut fired: Option<StdInstant> = None;
		loop {
			let deadline = (*rx.borrow_and_update()).filter(|at| fired != Some(*at));
			let expired = async move {
				match deadline {
					Some(at) => sleep_until(Instant::from_std(at)).await,
					None => std::future::pending::<()>().await,
				}
			};

			tokio::select! {
				biased;
				() = token.cancelled() => break,
				changed = rx.changed() => {
					if changed.is_err() {
						break;
					}
				}
				() = expired => {
					tracing::trace!("Quiet window elapsed");
					fired = deadline;
					fire();
				}
			}
		}
		tracing::trace!("Debounce driver stopped");
	});

	DebounceHandle {
		deadlines,
		cancel,
		task,
	}
}
