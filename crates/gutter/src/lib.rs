//! Gutter indicators for scope spans.
//!
//! The [`DecorationApplicator`] owns every visual mark it asks the host to
//! create. Each pass releases the previous generation before creating the
//! next, so marks never accumulate across edits.
//!
//! Icons are plain SVG documents handed to the host as data URIs; the
//! [`IconCache`] keeps one per palette color for as long as the display
//! settings stay the same.

pub mod cache;
pub mod decorate;
pub mod host;
pub mod icon;

pub use cache::IconCache;
pub use decorate::{ApplyOutcome, DecorationApplicator, SkipReason, decoration_target};
pub use host::{GutterHost, IconSizing, MarkRange, SurfaceId};
pub use icon::{IconImage, IconKind};
