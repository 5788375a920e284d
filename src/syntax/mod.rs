//! Syntax classification module
//!
//! This module provides the token classification engine:
//! - Category tables (exact word sets and whole-token patterns)
//! - The classifier that walks a table in order
//! - Category to role-name binding
//! - Per-buffer install sessions
//! - Host-side themes resolving role names to styles

mod binding;
pub mod builtin;
mod classifier;
mod engine;
mod rules;
mod session;
mod style;
mod table;
mod tokens;

pub use binding::{RoleName, Span, StyleBinding};
pub use classifier::TokenClassifier;
pub use engine::{BufferId, SyntaxEngine};
pub use rules::{CategoryRule, RuleEntry};
pub use session::{should_initialize, SessionState};
pub use style::{Color, Style, Theme};
pub use table::CategoryTable;
pub use tokens::{Category, Token};
