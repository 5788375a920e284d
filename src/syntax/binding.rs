//! Category to role-name binding
//!
//! A role name says what a token *is* for presentation purposes
//! ("Keyword", "Boolean", "Number"). Turning a role into colors is the
//! host's job; see `Theme`.

use std::fmt;

use super::tokens::Category;

/// Stable, abstract presentation role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleName(&'static str);

impl RoleName {
    pub const KEYWORD: RoleName = RoleName("Keyword");
    pub const BOOLEAN: RoleName = RoleName("Boolean");
    pub const NUMBER: RoleName = RoleName("Number");

    /// All known role names
    pub const ALL: [RoleName; 3] = [RoleName::KEYWORD, RoleName::BOOLEAN, RoleName::NUMBER];

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Look up a role by name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.0 == name)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Maps categories to role names
///
/// Total over every classified category; `Unclassified` has no role
/// and is left to the host's default presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleBinding;

impl StyleBinding {
    pub fn new() -> Self {
        Self
    }

    /// Role name for a category, if it has one
    pub fn style_for(&self, category: Category) -> Option<RoleName> {
        match category {
            Category::Keyword => Some(RoleName::KEYWORD),
            Category::BooleanLiteral => Some(RoleName::BOOLEAN),
            Category::NumericLiteral => Some(RoleName::NUMBER),
            Category::Unclassified => None,
        }
    }
}

/// A classified region of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    pub category: Category,
    /// Role to present this span with
    pub role: RoleName,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, category: Category, role: RoleName) -> Self {
        Self {
            start,
            end,
            category,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_for_is_total_over_classified() {
        let binding = StyleBinding::new();
        for category in Category::ALL {
            assert_eq!(binding.style_for(category).is_some(), category.is_classified());
        }
    }

    #[test]
    fn test_role_names() {
        let binding = StyleBinding::new();
        assert_eq!(binding.style_for(Category::Keyword).map(|r| r.as_str()), Some("Keyword"));
        assert_eq!(binding.style_for(Category::BooleanLiteral).map(|r| r.as_str()), Some("Boolean"));
        assert_eq!(binding.style_for(Category::NumericLiteral).map(|r| r.as_str()), Some("Number"));
        assert_eq!(binding.style_for(Category::Unclassified), None);
    }

    #[test]
    fn test_role_from_name() {
        assert_eq!(RoleName::from_name("Boolean"), Some(RoleName::BOOLEAN));
        assert_eq!(RoleName::from_name("BooleanLiteral"), None);
        assert_eq!(RoleName::NUMBER.to_string(), "Number");
    }
}
