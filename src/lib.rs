//! px2-syntax - token classification for px2 source highlighting
//!
//! The core is [`syntax`]: a category table, a classifier over it, a
//! category to role-name binding and a per-buffer install guard.
//! [`scanner`], [`render`] and [`config`] are the pieces a host needs
//! to drive it from the command line.

pub mod config;
pub mod error;
pub mod render;
pub mod scanner;
pub mod syntax;

pub use error::{Result, SyntaxError};
