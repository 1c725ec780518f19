//! # sqlcraft
//!
//! Flavor-aware SQL statement assembly for `CREATE TABLE`.
//!
//! ## Features
//!
//! - **Fluent builder**: definitions and options are added call by call
//! - **Deferred dialect**: the target [`Flavor`] is chosen at build time
//! - **Placeholder compilation**: values bound with `var()` become `$1`, `?`,
//!   `@p1` or `:1` in final text order, with a matching argument list
//! - **Injection points**: raw SQL lands right after the last structural call
//!
//! ```
//! use sqlcraft::{create_table, ColumnType, Flavor, SqlBuilder};
//!
//! let mut ctb = create_table("users");
//! ctb.if_not_exists().pk_column();
//! let default_role = ctb.var("member");
//! ctb.define(["role", ColumnType::Text.as_str(), "DEFAULT", default_role.as_str()])
//!     .created_column();
//!
//! let pg = ctb.build().unwrap();
//! assert_eq!(
//!     pg.sql,
//!     "CREATE TABLE IF NOT EXISTS users (id bigserial PRIMARY KEY NOT NULL, \
//!      role text DEFAULT $1, created_at timestamptz NOT NULL DEFAULT NOW())"
//! );
//! assert_eq!(pg.params.len(), 1);
//!
//! let mysql = ctb.build_with_flavor(Flavor::MySql, &[]).unwrap();
//! assert!(mysql.sql.contains("DEFAULT ?"));
//! ```

pub mod args;
pub mod config;
pub mod ddl;
pub mod error;
pub mod flavor;
pub mod ident;
pub mod injection;
mod log;
pub mod param;
pub mod prelude;
pub mod types;

pub use args::Args;
pub use config::{BuilderConfig, LogConfig};
pub use ddl::{
    CompiledStatement, CreateTableBuilder, CreateTableMarker, SqlBuilder, create_table,
    create_temp_table,
};
pub use error::{BuildError, BuildResult};
pub use flavor::Flavor;
pub use ident::{escape, escape_all};
pub use injection::Injection;
pub use param::Param;
pub use types::{ColumnType, with_modifiers};
