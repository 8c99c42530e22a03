//! Scope gutter engine.
//!
//! [`Engine`] ties the pipeline together: it receives [`HostEvent`]s from
//! the host editor, debounces recomputation requests, runs the
//! select/tokenize/build pass over the active document, hands the spans to
//! the gutter applicator and keeps the cursor status readout current.
//!
//! Hosts with their own event loop call [`Engine::poll`] on every tick.
//! Hosts running on tokio hand [`Engine::deadline`] to a
//! [`driver::spawn_debounced`] task and poll when it wakes them.

pub mod debounce;
pub mod driver;
mod engine;
pub mod event;
pub mod host;
pub mod status;

#[cfg(test)]
pub(crate) mod test_host;

pub use debounce::{DebounceState, DebounceTimer};
pub use engine::{Engine, EngineOptions, PassOutcome};
pub use event::HostEvent;
pub use host::{DocumentId, EditorHost};
pub use status::StatusReadout;
