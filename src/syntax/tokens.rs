//! Token categories
//!
//! This module defines the semantic categories a token can be
//! classified into, and the token view the classifier consumes.

/// Semantic category assigned to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Stack words (dup, drop, over, ...)
    Keyword,
    /// true / false
    BooleanLiteral,
    /// Whole-token decimal integers
    NumericLiteral,
    /// Anything no rule claims
    Unclassified,
}

impl Category {
    /// All categories, in declaration order
    pub const ALL: [Category; 4] = [
        Category::Keyword,
        Category::BooleanLiteral,
        Category::NumericLiteral,
        Category::Unclassified,
    ];

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::BooleanLiteral => "BooleanLiteral",
            Category::NumericLiteral => "NumericLiteral",
            Category::Unclassified => "Unclassified",
        }
    }

    /// Evaluation precedence among rules of the same kind (lower first)
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            Category::Keyword => 0,
            Category::BooleanLiteral => 1,
            Category::NumericLiteral => 2,
            Category::Unclassified => 3,
        }
    }

    pub fn is_classified(&self) -> bool {
        *self != Category::Unclassified
    }
}

/// A token handed over by an external tokenizer
///
/// Only the raw text takes part in classification; the byte span is
/// carried through so results can be mapped back onto the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Raw token text
    pub text: &'a str,
    /// Byte offset where the token starts (inclusive)
    pub start: usize,
    /// Byte offset where the token ends (exclusive)
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Create a token from its text and starting byte offset
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            start,
            end: start + text.len(),
        }
    }

}
