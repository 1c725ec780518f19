//! DDL statement builders.
//!
//! Builders accumulate structure (table name, definitions, options) plus
//! raw SQL injected at grammar-ordered markers, and compile it for a
//! [`Flavor`](crate::Flavor) at build time:
//!
//! - injected SQL is flushed marker by marker in grammar order, never in call order;
//! - values bound with `var()` become the flavor's placeholders, numbered in
//!   final text order;
//! - building takes `&self`, so a builder can be compiled again, for another
//!   flavor or after further changes.

mod create_table;
mod traits;

pub use create_table::{CreateTableBuilder, CreateTableMarker, create_table, create_temp_table};
pub use traits::{CompiledStatement, SqlBuilder};
