//! Token classification
//!
//! The classifier walks a table's rules in order and returns the
//! category of the first rule that matches. It knows nothing about
//! which categories exist; all of that lives in the table.

use super::binding::{Span, StyleBinding};
use super::table::CategoryTable;
use super::tokens::{Category, Token};

/// Classifies whole tokens against a category table
#[derive(Debug, Clone, Copy)]
pub struct TokenClassifier<'t> {
    table: &'t CategoryTable,
}

impl<'t> TokenClassifier<'t> {
    /// Wire a classifier to a table
    pub fn new(table: &'t CategoryTable) -> Self {
        Self { table }
    }

    /// Classify a single token's text
    ///
    /// Empty text is always `Unclassified`, even if some pattern would
    /// accept the empty string.
    pub fn classify(&self, text: &str) -> Category {
        if text.is_empty() {
            return Category::Unclassified;
        }
        self.table
            .entries()
            .iter()
            .find(|entry| entry.rule.matches(text))
            .map_or(Category::Unclassified, |entry| entry.category)
    }

    /// Classify a token stream and bind each result to a role name
    ///
    /// Unclassified tokens produce no span.
    pub fn classify_tokens<'a, I>(&self, tokens: I, binding: &StyleBinding) -> Vec<Span>
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        tokens
            .into_iter()
            .filter_map(|token| {
                let category = self.classify(token.text);
                binding
                    .style_for(category)
                    .map(|role| Span::new(token.start, token.end, category, role))
            })
            .collect()
    }
}
