//! Grammar selection.

use crate::grammar::{Grammar, GrammarRegistry};

impl GrammarRegistry {
	/// Picks the first grammar, in priority order, that finds a token in
	/// `text`.
	///
	/// `None` is the common case of a document without scope markers; the
	/// caller decorates nothing.
	pub fn select(&self, text: &str) -> Option<&Grammar> {
		let selected = self.iter().find(|grammar| grammar.matches(text));
		tracing::trace!(grammar = ?selected.map(Grammar::kind), "Selected grammar");
		selected
	}
}
