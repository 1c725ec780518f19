//! Convenient imports for typical `sqlcraft` usage.
//!
//! ```ignore
//! use sqlcraft::prelude::*;
//! ```

pub use crate::{
    BuildError, BuildResult, BuilderConfig, ColumnType, CompiledStatement, CreateTableBuilder,
    Flavor, Param, SqlBuilder, create_table, create_temp_table, escape,
};
