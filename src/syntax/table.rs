//! Category tables
//!
//! A CategoryTable is the ordered list of rules a classifier walks.
//! Exact-set rules always come before pattern rules; within each kind,
//! keywords come before booleans whatever order they were added in.

use tracing::debug;

use super::builtin;
use super::rules::{CategoryRule, RuleEntry};
use super::tokens::Category;
use crate::config::TableConfig;
use crate::error::{Result, SyntaxError};

/// A complete set of classification rules for one language
#[derive(Debug, Clone)]
pub struct CategoryTable {
    /// Table name (e.g., "px2")
    pub name: String,
    /// Rules in evaluation order
    entries: Vec<RuleEntry>,
}

impl CategoryTable {
    /// Create a new empty table
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Add a rule for a category
    pub fn add_rule(&mut self, category: Category, rule: CategoryRule) -> Result<()> {
        if !category.is_classified() {
            return Err(SyntaxError::UnclassifiedRule);
        }
        self.insert(RuleEntry::new(category, rule));
        Ok(())
    }

    /// Insert an entry whose category is known to be classified
    pub(crate) fn insert(&mut self, entry: RuleEntry) {
        self.entries.push(entry);
        // Stable sort: exact sets first, then category precedence,
        // insertion order among rules for the same category
        self.entries
            .sort_by_key(|entry| (entry.rule.rank(), entry.category.precedence()));
    }

    /// Add an exact-set rule
    pub fn add_exact_set<I, S>(&mut self, category: Category, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_rule(category, CategoryRule::exact(words))
    }

    /// Add a whole-token pattern rule
    pub fn add_pattern(&mut self, category: Category, pattern: &str) -> Result<()> {
        self.add_rule(category, CategoryRule::pattern(pattern)?)
    }

    /// Rules in evaluation order
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a px2-shaped table from configured sets and pattern
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        let mut table = CategoryTable::new(builtin::PX2_NAME);
        table.add_exact_set(Category::Keyword, config.keyword_set.iter().cloned())?;
        table.add_exact_set(Category::BooleanLiteral, config.boolean_set.iter().cloned())?;
        table.add_pattern(Category::NumericLiteral, &config.numeric_pattern)?;
        debug!(
            keywords = config.keyword_set.len(),
            booleans = config.boolean_set.len(),
            numeric_pattern = %config.numeric_pattern,
            "built category table from config"
        );
        Ok(table)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        builtin::px2_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::classifier::TokenClassifier;

    #[test]
    fn test_pattern_added_first_still_evaluated_last() {
        let mut table = CategoryTable::new("Test");
        table.add_pattern(Category::NumericLiteral, "[0-9]+").unwrap();
        table.add_exact_set(Category::Keyword, ["dup"]).unwrap();
        table.add_exact_set(Category::BooleanLiteral, ["true"]).unwrap();

        let order: Vec<Category> = table.entries().iter().map(|e| e.category).collect();
        assert_eq!(
            order,
            vec![Category::Keyword, Category::BooleanLiteral, Category::NumericLiteral]
        );
    }

    #[test]
    fn test_keyword_set_checked_before_earlier_boolean_set() {
        let mut table = CategoryTable::new("Test");
        table.add_exact_set(Category::BooleanLiteral, ["dup"]).unwrap();
        table.add_exact_set(Category::Keyword, builtin::PX2_KEYWORDS).unwrap();
        table.add_pattern(Category::NumericLiteral, "[0-9]+").unwrap();

        let order: Vec<Category> = table.entries().iter().map(|e| e.category).collect();
        assert_eq!(
            order,
            vec![Category::Keyword, Category::BooleanLiteral, Category::NumericLiteral]
        );
        assert_eq!(TokenClassifier::new(&table).classify("dup"), Category::Keyword);
    }

    #[test]
    fn test_unclassified_rule_rejected() {
        let mut table = CategoryTable::new("Test");
        let err = table.add_exact_set(Category::Unclassified, ["x"]).unwrap_err();
        assert!(matches!(err, SyntaxError::UnclassifiedRule));
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_config_defaults_match_builtin() {
        let table = CategoryTable::from_config(&TableConfig::default()).unwrap();
        let builtin = builtin::px2_table();
        assert_eq!(table.entries().len(), builtin.entries().len());
        for word in builtin::PX2_KEYWORDS {
            assert!(table.entries()[0].rule.matches(word));
        }
    }

    #[test]
    fn test_from_config_bad_pattern() {
        let config = TableConfig {
            numeric_pattern: "(".to_string(),
            ..TableConfig::default()
        };
        assert!(CategoryTable::from_config(&config).is_err());
    }
}
