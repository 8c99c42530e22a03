//! Scope-section detection for documents that encode mutually exclusive
//! sections with point markers.
//!
//! The pipeline runs leaves first:
//!
//! 1. [`GrammarRegistry::select`] picks the grammar a document uses.
//! 2. [`tokenize`] extracts ordered marker [`Token`]s.
//! 3. [`build_spans`] turns the tokens into covering [`Span`]s and colors
//!    them from a [`Palette`].
//! 4. [`locate`] finds the span under the cursor.
//!
//! Everything here is pure: the same text always yields the same spans.

pub mod error;
pub mod grammar;
pub mod locate;
pub mod palette;
pub mod select;
pub mod span;
pub mod token;

pub use error::{Result, ScopeError};
pub use grammar::{Closing, DelimiterGuard, Grammar, GrammarKind, GrammarRegistry};
pub use locate::locate;
pub use palette::{Palette, PaletteEntry};
pub use span::{Span, build_spans};
pub use token::{Token, TokenKind, Tokens, tokenize};
