//! px2 category table

use tracing::error;

use crate::syntax::rules::{CategoryRule, RuleEntry};
use crate::syntax::table::CategoryTable;
use crate::syntax::tokens::Category;

pub const PX2_NAME: &str = "px2";

/// Stack words
pub const PX2_KEYWORDS: [&str; 6] = ["dup", "drop", "over", "swap", "rot", "println"];

pub const PX2_BOOLEANS: [&str; 2] = ["true", "false"];

/// ASCII digits only; `\d` would also accept other Unicode digits
pub const PX2_NUMERIC_PATTERN: &str = "[0-9]+";

/// Create the px2 category table
pub fn px2_table() -> CategoryTable {
    let mut table = CategoryTable::new(PX2_NAME);

    table.insert(RuleEntry::new(Category::Keyword, CategoryRule::exact(PX2_KEYWORDS)));
    table.insert(RuleEntry::new(Category::BooleanLiteral, CategoryRule::exact(PX2_BOOLEANS)));

    // Integers
    match CategoryRule::pattern(PX2_NUMERIC_PATTERN) {
        Ok(rule) => table.insert(RuleEntry::new(Category::NumericLiteral, rule)),
        Err(e) => error!(error = %e, "built-in numeric pattern does not compile"),
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_pattern_compiles() {
        let rule = CategoryRule::pattern(PX2_NUMERIC_PATTERN).unwrap();
        assert!(rule.matches("0"));
        assert!(rule.matches("1234567890"));
    }

    #[test]
    fn test_px2_table_shape() {
        let table = px2_table();
        assert_eq!(table.name, "px2");
        let categories: Vec<Category> = table.entries().iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![Category::Keyword, Category::BooleanLiteral, Category::NumericLiteral]
        );
    }
}
