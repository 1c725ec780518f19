//! Builder configuration.
//!
//! ```toml
//! flavor = "postgresql"
//!
//! [log]
//! max_sql_length = 200
//! ```

use crate::ddl::CreateTableBuilder;
use crate::error::{BuildError, BuildResult};
use crate::flavor::Flavor;
use serde::Deserialize;
use std::path::Path;

/// Settings shared by builders created from one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Default flavor for new builders.
    pub flavor: Flavor,
    pub log: LogConfig,
}

// Flavor names are resolved after parsing so an unknown one surfaces as
// `BuildError::UnknownFlavor`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    flavor: Option<String>,
    #[serde(default)]
    log: LogConfig,
}

/// Build logging settings (used with the `tracing` feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Truncate SQL in log events (in bytes). `None` means no truncation.
    #[serde(default = "default_max_sql_length")]
    pub max_sql_length: Option<usize>,
}

fn default_max_sql_length() -> Option<usize> {
    Some(200)
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_sql_length: default_max_sql_length(),
        }
    }
}

impl BuilderConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> BuildResult<Self> {
        let file: ConfigFile = toml::from_str(raw)
            .map_err(|e| BuildError::config(format!("failed to parse config: {e}")))?;

        let flavor = match file.flavor {
            Some(name) => Flavor::lookup(&name)?,
            None => Flavor::default(),
        };
        Ok(Self {
            flavor,
            log: file.log,
        })
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BuildResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BuildError::config(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Start a `CREATE TABLE` builder using these settings.
    pub fn create_table(&self, table: &str) -> CreateTableBuilder {
        let mut builder = self.builder();
        builder.create_table(table);
        builder
    }

    /// Start a `CREATE TEMPORARY TABLE` builder using these settings.
    pub fn create_temp_table(&self, table: &str) -> CreateTableBuilder {
        let mut builder = self.builder();
        builder.create_temp_table(table);
        builder
    }

    fn builder(&self) -> CreateTableBuilder {
        let mut builder = CreateTableBuilder::with_flavor(self.flavor);
        builder.set_log_config(self.log);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddl::SqlBuilder;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = BuilderConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, BuilderConfig::default());
        assert_eq!(cfg.flavor, Flavor::PostgreSql);
        assert_eq!(cfg.log.max_sql_length, Some(200));
    }

    #[test]
    fn parses_flavor_and_log() {
        let cfg = BuilderConfig::from_toml_str(
            r#"
flavor = "MySQL"

[log]
max_sql_length = 64
"#,
        )
        .unwrap();
        assert_eq!(cfg.flavor, Flavor::MySql);
        assert_eq!(cfg.log.max_sql_length, Some(64));
    }

    #[test]
    fn unknown_flavor_is_a_config_error() {
        let err = BuilderConfig::from_toml_str(r#"flavor = "db2""#).unwrap_err();
        assert_eq!(err, BuildError::UnknownFlavor("db2".to_string()));
        assert!(err.is_config());
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = BuilderConfig::from_toml_str("flavor = ").unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = BuilderConfig::from_toml_str("dialect = \"mysql\"").unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = BuilderConfig::load("/definitely/not/here/sqlcraft.toml").unwrap_err();
        assert!(matches!(err, BuildError::Config(ref m) if m.contains("failed to read")));
    }

    #[test]
    fn builders_follow_configured_flavor() {
        let cfg = BuilderConfig {
            flavor: Flavor::SqlServer,
            ..Default::default()
        };
        let mut ctb = cfg.create_table("t");
        let v = ctb.var(1_i32);
        ctb.define(["n", "int", "DEFAULT", v.as_str()]);
        assert_eq!(ctb.flavor(), Flavor::SqlServer);
        assert_eq!(
            ctb.build().unwrap().sql,
            "CREATE TABLE t (n int DEFAULT @p1)"
        );

        let tmp = cfg.create_temp_table("t");
        assert_eq!(tmp.to_sql().unwrap(), "CREATE TEMPORARY TABLE t");
    }
}
