//! Trait definitions for statement builders.

use crate::error::BuildResult;
use crate::flavor::Flavor;
use crate::param::Param;
use tokio_postgres::types::ToSql;

/// Base trait for all statement builders.
pub trait SqlBuilder {
    /// Compile for `flavor`, with `initial` values bound ahead of the
    /// builder's own.
    fn build_with_flavor(&self, flavor: Flavor, initial: &[Param])
    -> BuildResult<CompiledStatement>;

    /// The flavor this builder compiles for by default.
    fn flavor(&self) -> Flavor;

    /// Compile for the builder's own flavor.
    fn build(&self) -> BuildResult<CompiledStatement> {
        self.build_with_flavor(self.flavor(), &[])
    }

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> BuildResult<String> {
        self.build().map(|c| c.sql)
    }
}

/// The result of compiling a statement.
///
/// `params[i]` binds to the `(i + 1)`-th placeholder of `sql`, reading left
/// to right.
#[derive(Debug, Clone)]
pub struct CompiledStatement {
    pub sql: String,
    pub params: Vec<Param>,
}

impl CompiledStatement {
    /// Create a new compiled statement.
    pub fn new(sql: String, params: Vec<Param>) -> Self {
        Self { sql, params }
    }

    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }

    /// Split into `(sql, params)`.
    pub fn into_parts(self) -> (String, Vec<Param>) {
        (self.sql, self.params)
    }
}
