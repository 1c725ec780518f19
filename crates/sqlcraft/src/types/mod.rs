//! Column type catalog.
//!
//! Keywords for PostgreSQL column types plus the `keyword(modifier,...)`
//! formatter used for parameterized types such as `varchar(255)`.

mod column;

pub use column::{ColumnType, with_modifiers};
