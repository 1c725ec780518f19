//! CREATE TABLE builder.

use crate::args::Args;
use crate::config::LogConfig;
use crate::ddl::traits::{CompiledStatement, SqlBuilder};
use crate::error::BuildResult;
use crate::flavor::Flavor;
use crate::ident::escape;
use crate::injection::Injection;
use crate::param::Param;
use crate::types::ColumnType;
use std::fmt;
use tokio_postgres::types::ToSql;

/// Positions in a CREATE TABLE statement where raw SQL can be injected,
/// in grammar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CreateTableMarker {
    /// Before the verb.
    Init,
    /// Right after the table name.
    AfterCreate,
    /// Right after the definitions clause.
    AfterDefine,
    /// Right after the table options.
    AfterOption,
}

/// CREATE TABLE builder.
///
/// Every structural call moves the builder's current marker, so
/// [`sql`](Self::sql) injects raw SQL right after whatever was added last.
///
/// # Example
/// ```
/// use sqlcraft::{create_table, SqlBuilder};
///
/// let mut ctb = create_table("public.users");
/// ctb.define(["id", "bigserial", "PRIMARY KEY", "NOT NULL"])
///     .define(["name", "varchar", "NOT NULL"])
///     .option(["ENGINE=InnoDB"]);
///
/// assert_eq!(
///     ctb.to_sql().unwrap(),
///     "CREATE TABLE public.users (id bigserial PRIMARY KEY NOT NULL, name varchar NOT NULL) ENGINE=InnoDB"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CreateTableBuilder {
    verb: &'static str,
    if_not_exists: bool,
    table: String,
    defs: Vec<Vec<String>>,
    options: Vec<Vec<String>>,

    args: Args,
    flavor: Flavor,
    injection: Injection<CreateTableMarker>,
    marker: CreateTableMarker,
    log: LogConfig,
}

impl Default for CreateTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateTableBuilder {
    /// Create an empty builder for the default flavor.
    pub fn new() -> Self {
        Self::with_flavor(Flavor::default())
    }

    /// Create an empty builder for `flavor`.
    pub fn with_flavor(flavor: Flavor) -> Self {
        Self {
            verb: "CREATE TABLE",
            if_not_exists: false,
            table: String::new(),
            defs: Vec::new(),
            options: Vec::new(),
            args: Args::new(),
            flavor,
            injection: Injection::new(),
            marker: CreateTableMarker::Init,
            log: LogConfig::default(),
        }
    }

    /// Change the default flavor, returning the previous one.
    pub fn set_flavor(&mut self, flavor: Flavor) -> Flavor {
        std::mem::replace(&mut self.flavor, flavor)
    }

    pub(crate) fn set_log_config(&mut self, log: LogConfig) {
        self.log = log;
    }

    /// Set the table name.
    pub fn create_table(&mut self, table: &str) -> &mut Self {
        self.table = escape(table);
        self.marker = CreateTableMarker::AfterCreate;
        self
    }

    /// Set the table name and switch the verb to `CREATE TEMPORARY TABLE`.
    pub fn create_temp_table(&mut self, table: &str) -> &mut Self {
        self.verb = "CREATE TEMPORARY TABLE";
        self.table = escape(table);
        self.marker = CreateTableMarker::AfterCreate;
        self
    }

    /// Add `IF NOT EXISTS` before the table name.
    pub fn if_not_exists(&mut self) -> &mut Self {
        self.if_not_exists = true;
        self
    }

    /// Add a column or constraint definition; tokens are joined by spaces.
    pub fn define<I, S>(&mut self, def: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defs.push(def.into_iter().map(Into::into).collect());
        self.marker = CreateTableMarker::AfterDefine;
        self
    }

    /// Add a table option; tokens are joined by spaces.
    pub fn option<I, S>(&mut self, opt: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.push(opt.into_iter().map(Into::into).collect());
        self.marker = CreateTableMarker::AfterOption;
        self
    }

    /// Inject raw SQL at the current marker.
    pub fn sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.injection.sql(self.marker, sql);
        self
    }

    /// Bind a value and return the token to embed in a definition, option or
    /// injected SQL.
    pub fn var<T: ToSql + Send + Sync + 'static>(&mut self, value: T) -> String {
        self.args.add(value)
    }

    /// Marker the next [`sql`](Self::sql) call attaches to.
    pub fn marker(&self) -> CreateTableMarker {
        self.marker
    }

    /// Number of definitions added so far.
    pub fn num_define(&self) -> usize {
        self.defs.len()
    }

    /// Number of table options added so far.
    pub fn num_option(&self) -> usize {
        self.options.len()
    }

    // ==================== Column helpers ====================

    /// `id bigserial PRIMARY KEY NOT NULL`
    pub fn pk_column(&mut self) -> &mut Self {
        self.define([
            "id",
            ColumnType::Bigserial.as_str(),
            "PRIMARY KEY",
            "NOT NULL",
        ])
    }

    /// `<name>_id bigint [NOT NULL] REFERENCES <table>(id)`.
    ///
    /// `<name>` is the last dotted segment of `table` with a trailing `s`
    /// removed, so `public.users` gives `user_id`.
    pub fn fk_column(&mut self, table: &str, nullable: bool) -> &mut Self {
        let name = table.rsplit('.').next().unwrap_or(table);
        let name = name.strip_suffix('s').unwrap_or(name);

        let mut def = vec![escape(&format!("{name}_id")), ColumnType::Bigint.to_string()];
        if !nullable {
            def.push("NOT NULL".to_string());
        }
        def.push("REFERENCES".to_string());
        def.push(format!("{}(id)", escape(table)));
        self.define(def)
    }

    /// `created_at timestamptz NOT NULL DEFAULT NOW()`
    pub fn created_column(&mut self) -> &mut Self {
        self.define([
            "created_at",
            ColumnType::Timestamptz.as_str(),
            "NOT NULL",
            "DEFAULT NOW()",
        ])
    }

    /// `updated_at timestamptz NOT NULL DEFAULT NOW()`
    pub fn updated_column(&mut self) -> &mut Self {
        self.define([
            "updated_at",
            ColumnType::Timestamptz.as_str(),
            "NOT NULL",
            "DEFAULT NOW()",
        ])
    }

    /// `deleted_at timestamptz NULL`
    pub fn deleted_column(&mut self) -> &mut Self {
        self.define(["deleted_at", ColumnType::Timestamptz.as_str(), "NULL"])
    }

    /// `<name> <type> NULL|NOT NULL`
    pub fn column(&mut self, name: &str, col_type: ColumnType, nullable: bool) -> &mut Self {
        let null = if nullable { "NULL" } else { "NOT NULL" };
        self.define([escape(name).as_str(), col_type.as_str(), null])
    }

    fn write_skeleton(&self, out: &mut String) {
        self.injection.write_to(CreateTableMarker::Init, out);
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(self.verb);
        if self.if_not_exists {
            out.push_str(" IF NOT EXISTS");
        }
        out.push(' ');
        out.push_str(&self.table);
        self.injection.write_to(CreateTableMarker::AfterCreate, out);

        if !self.defs.is_empty() {
            out.push_str(" (");
            write_groups(&self.defs, out);
            out.push(')');
        }
        self.injection.write_to(CreateTableMarker::AfterDefine, out);

        if !self.options.is_empty() {
            out.push(' ');
            write_groups(&self.options, out);
        }
        self.injection.write_to(CreateTableMarker::AfterOption, out);
    }
}

impl SqlBuilder for CreateTableBuilder {
    fn build_with_flavor(
        &self,
        flavor: Flavor,
        initial: &[Param],
    ) -> BuildResult<CompiledStatement> {
        let mut buf = String::with_capacity(64 + self.table.len());
        self.write_skeleton(&mut buf);

        let result = self.args.compile(&buf, flavor, initial);
        crate::log::trace_build(&self.log, "create_table", flavor, &result);
        result
    }

    fn flavor(&self) -> Flavor {
        self.flavor
    }
}

impl fmt::Display for CreateTableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.build() {
            Ok(compiled) => f.write_str(&compiled.sql),
            Err(_) => {
                // Unresolvable tokens: show the raw text.
                let mut buf = String::new();
                self.write_skeleton(&mut buf);
                f.write_str(&buf)
            }
        }
    }
}

/// Join groups as `a b, c d`.
fn write_groups(groups: &[Vec<String>], out: &mut String) {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        for (j, token) in group.iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
}

/// Start a `CREATE TABLE` builder for the default flavor.
pub fn create_table(table: &str) -> CreateTableBuilder {
    Flavor::default().create_table(table)
}

/// Start a `CREATE TEMPORARY TABLE` builder for the default flavor.
pub fn create_temp_table(table: &str) -> CreateTableBuilder {
    Flavor::default().create_temp_table(table)
}
