//! Category rules
//!
//! A rule decides whether a whole token belongs to a category, either
//! by exact membership in a word set or by matching a pattern.

use std::collections::HashSet;

use regex::Regex;

use super::tokens::Category;
use crate::error::{Result, SyntaxError};

/// Rule describing which raw token texts belong to a category
#[derive(Debug, Clone)]
pub enum CategoryRule {
    /// Case-sensitive membership in a finite set of words
    ExactSet(HashSet<String>),
    /// Whole-token regex match
    Pattern {
        /// Pattern as written (unanchored)
        source: String,
        /// Compiled pattern, anchored to both ends of the token
        regex: Regex,
    },
}

impl CategoryRule {
    /// Create an exact-set rule from a list of words
    pub fn exact<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CategoryRule::ExactSet(words.into_iter().map(Into::into).collect())
    }

    /// Create a pattern rule
    ///
    /// The pattern is wrapped as `^(?:...)$`, so a match inside a
    /// larger token never counts.
    pub fn pattern(source: &str) -> Result<Self> {
        let anchored = format!("^(?:{})$", source);
        let regex = Regex::new(&anchored).map_err(|e| SyntaxError::InvalidPattern {
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(CategoryRule::Pattern {
            source: source.to_string(),
            regex,
        })
    }

    /// Check whether the whole token text satisfies this rule
    pub fn matches(&self, text: &str) -> bool {
        match self {
            CategoryRule::ExactSet(words) => words.contains(text),
            CategoryRule::Pattern { regex, .. } => regex.is_match(text),
        }
    }

    /// Evaluation rank: exact sets (0) before patterns (1)
    pub(crate) fn rank(&self) -> u8 {
        match self {
            CategoryRule::ExactSet(_) => 0,
            CategoryRule::Pattern { .. } => 1,
        }
    }
}

/// One entry of a category table
#[derive(Debug, Clone)]
pub struct RuleEntry {
    /// Category assigned when the rule matches
    pub category: Category,
    pub rule: CategoryRule,
}

impl RuleEntry {
    pub fn new(category: Category, rule: CategoryRule) -> Self {
        Self { category, rule }
    }
}
