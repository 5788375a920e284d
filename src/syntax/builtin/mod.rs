//! Built-in category tables

mod px2;

pub use px2::{px2_table, PX2_BOOLEANS, PX2_KEYWORDS, PX2_NAME, PX2_NUMERIC_PATTERN};
