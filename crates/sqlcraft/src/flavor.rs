//! SQL dialects ("flavors").
//!
//! A [`Flavor`] decides two things at build time:
//!
//! - how the placeholder for the n-th bound value is spelled (`?`, `$1`, `@p1`, `:1`);
//! - how an identifier is quoted (`"name"`, `` `name` ``, `[name]`).
//!
//! Flavors are plain `Copy` values and carry no state.
//!
//! # Example
//! ```
//! use sqlcraft::Flavor;
//!
//! let pg: Flavor = "postgres".parse().unwrap();
//! assert_eq!(pg.placeholder(2), "$2");
//! assert_eq!(Flavor::MySql.quote("order"), "`order`");
//! ```

use crate::ddl::CreateTableBuilder;
use crate::error::{BuildError, BuildResult};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Target SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Flavor {
    MySql,
    #[default]
    PostgreSql,
    Sqlite,
    SqlServer,
    Cql,
    ClickHouse,
    Presto,
    Oracle,
    Informix,
    Doris,
}

impl Flavor {
    /// Every supported flavor.
    pub const ALL: [Flavor; 10] = [
        Flavor::MySql,
        Flavor::PostgreSql,
        Flavor::Sqlite,
        Flavor::SqlServer,
        Flavor::Cql,
        Flavor::ClickHouse,
        Flavor::Presto,
        Flavor::Oracle,
        Flavor::Informix,
        Flavor::Doris,
    ];

    /// Canonical lowercase name, as accepted by [`Flavor::lookup`].
    pub const fn name(self) -> &'static str {
        match self {
            Flavor::MySql => "mysql",
            Flavor::PostgreSql => "postgresql",
            Flavor::Sqlite => "sqlite",
            Flavor::SqlServer => "sqlserver",
            Flavor::Cql => "cql",
            Flavor::ClickHouse => "clickhouse",
            Flavor::Presto => "presto",
            Flavor::Oracle => "oracle",
            Flavor::Informix => "informix",
            Flavor::Doris => "doris",
        }
    }

    /// Look up a flavor by name (case-insensitive, common aliases accepted).
    pub fn lookup(name: &str) -> BuildResult<Self> {
        let flavor = match name.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Flavor::MySql,
            "postgresql" | "postgres" | "pg" => Flavor::PostgreSql,
            "sqlite" | "sqlite3" => Flavor::Sqlite,
            "sqlserver" | "mssql" => Flavor::SqlServer,
            "cql" | "cassandra" => Flavor::Cql,
            "clickhouse" => Flavor::ClickHouse,
            "presto" | "trino" => Flavor::Presto,
            "oracle" => Flavor::Oracle,
            "informix" => Flavor::Informix,
            "doris" => Flavor::Doris,
            _ => return Err(BuildError::UnknownFlavor(name.to_string())),
        };
        Ok(flavor)
    }

    /// Whether the placeholder text depends on the value's position.
    pub const fn is_position_dependent(self) -> bool {
        matches!(self, Flavor::PostgreSql | Flavor::SqlServer | Flavor::Oracle)
    }

    /// Append the placeholder for the value at 1-based `ordinal`.
    pub fn write_placeholder(self, ordinal: usize, out: &mut String) {
        use std::fmt::Write;
        match self {
            Flavor::PostgreSql => {
                let _ = write!(out, "${ordinal}");
            }
            Flavor::SqlServer => {
                let _ = write!(out, "@p{ordinal}");
            }
            Flavor::Oracle => {
                let _ = write!(out, ":{ordinal}");
            }
            Flavor::MySql
            | Flavor::Sqlite
            | Flavor::Cql
            | Flavor::ClickHouse
            | Flavor::Presto
            | Flavor::Informix
            | Flavor::Doris => out.push('?'),
        }
    }

    /// Placeholder for the value at 1-based `ordinal`.
    pub fn placeholder(self, ordinal: usize) -> String {
        let mut out = String::with_capacity(4);
        self.write_placeholder(ordinal, &mut out);
        out
    }

    /// Quote an identifier for this flavor.
    ///
    /// The closing quote character is doubled inside the name.
    pub fn quote(self, name: &str) -> String {
        let (open, close) = match self {
            Flavor::MySql | Flavor::ClickHouse | Flavor::Doris => ('`', '`'),
            Flavor::SqlServer => ('[', ']'),
            Flavor::PostgreSql
            | Flavor::Sqlite
            | Flavor::Cql
            | Flavor::Presto
            | Flavor::Oracle
            | Flavor::Informix => ('"', '"'),
        };

        let mut out = String::with_capacity(name.len() + 2);
        out.push(open);
        for ch in name.chars() {
            if ch == close {
                out.push(close);
            }
            out.push(ch);
        }
        out.push(close);
        out
    }

    /// Start a `CREATE TABLE` builder bound to this flavor.
    pub fn create_table(self, table: &str) -> CreateTableBuilder {
        let mut builder = CreateTableBuilder::with_flavor(self);
        builder.create_table(table);
        builder
    }

    /// Start a `CREATE TEMPORARY TABLE` builder bound to this flavor.
    pub fn create_temp_table(self, table: &str) -> CreateTableBuilder {
        let mut builder = CreateTableBuilder::with_flavor(self);
        builder.create_temp_table(table);
        builder
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flavor::lookup(s)
    }
}

impl TryFrom<String> for Flavor {
    type Error = BuildError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Flavor::lookup(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_per_flavor() {
        assert_eq!(Flavor::PostgreSql.placeholder(12), "$12");
        assert_eq!(Flavor::SqlServer.placeholder(3), "@p3");
        assert_eq!(Flavor::Oracle.placeholder(1), ":1");
        assert_eq!(Flavor::MySql.placeholder(1), "?");
        assert_eq!(Flavor::MySql.placeholder(9), "?");
        assert_eq!(Flavor::Sqlite.placeholder(2), "?");
    }

    #[test]
    fn position_dependence_matches_rendering() {
        for flavor in Flavor::ALL {
            let differs = flavor.placeholder(1) != flavor.placeholder(2);
            assert_eq!(differs, flavor.is_position_dependent(), "{flavor}");
        }
    }

    #[test]
    fn quoting_per_flavor() {
        assert_eq!(Flavor::PostgreSql.quote("users"), r#""users""#);
        assert_eq!(Flavor::MySql.quote("users"), "`users`");
        assert_eq!(Flavor::SqlServer.quote("users"), "[users]");
        assert_eq!(Flavor::ClickHouse.quote("a`b"), "`a``b`");
        assert_eq!(Flavor::PostgreSql.quote(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(Flavor::SqlServer.quote("a]b"), "[a]]b]");
        assert_eq!(Flavor::Sqlite.quote(""), r#""""#);
    }

    #[test]
    fn lookup_by_name_and_alias() {
        for flavor in Flavor::ALL {
            assert_eq!(Flavor::lookup(flavor.name()).unwrap(), flavor);
            assert_eq!(flavor.to_string().parse::<Flavor>().unwrap(), flavor);
        }
        assert_eq!(Flavor::lookup("Postgres").unwrap(), Flavor::PostgreSql);
        assert_eq!(Flavor::lookup(" MSSQL ").unwrap(), Flavor::SqlServer);
    }

    #[test]
    fn lookup_rejects_unknown() {
        let err = Flavor::lookup("db2").unwrap_err();
        assert_eq!(err, BuildError::UnknownFlavor("db2".to_string()));
        assert!(err.is_config());
    }

    #[test]
    fn default_is_postgres() {
        assert_eq!(Flavor::default(), Flavor::PostgreSql);
    }
}
