use std::fmt;

/// PostgreSQL column type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Bigint,
    Bigserial,
    Bit,
    Varbit,
    Bool,
    Box,
    Bytea,
    Char,
    Varchar,
    Cidr,
    Circle,
    Date,
    Float8,
    Inet,
    Int,
    Interval,
    Json,
    Jsonb,
    Line,
    Lseg,
    Macaddr,
    Macaddr8,
    Money,
    Decimal,
    Path,
    PgLsn,
    PgSnapshot,
    Point,
    Polygon,
    Real,
    Smallint,
    Smallserial,
    Serial,
    Text,
    Time,
    Timetz,
    Timestamp,
    Timestamptz,
    Tsquery,
    Tsvector,
    TxidSnapshot,
    Uuid,
    Xml,
}

impl ColumnType {
    /// The SQL keyword for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ColumnType::Bigint => "bigint",
            ColumnType::Bigserial => "bigserial",
            ColumnType::Bit => "bit",
            ColumnType::Varbit => "varbit",
            ColumnType::Bool => "bool",
            ColumnType::Box => "box",
            ColumnType::Bytea => "bytea",
            ColumnType::Char => "char",
            ColumnType::Varchar => "varchar",
            ColumnType::Cidr => "cidr",
            ColumnType::Circle => "circle",
            ColumnType::Date => "date",
            ColumnType::Float8 => "float8",
            ColumnType::Inet => "inet",
            ColumnType::Int => "int",
            ColumnType::Interval => "interval",
            ColumnType::Json => "json",
            ColumnType::Jsonb => "jsonb",
            ColumnType::Line => "line",
            ColumnType::Lseg => "lseg",
            ColumnType::Macaddr => "macaddr",
            ColumnType::Macaddr8 => "macaddr8",
            ColumnType::Money => "money",
            ColumnType::Decimal => "decimal",
            ColumnType::Path => "path",
            ColumnType::PgLsn => "pg_lsn",
            ColumnType::PgSnapshot => "pg_snapshot",
            ColumnType::Point => "point",
            ColumnType::Polygon => "polygon",
            ColumnType::Real => "real",
            ColumnType::Smallint => "smallint",
            ColumnType::Smallserial => "smallserial",
            ColumnType::Serial => "serial",
            ColumnType::Text => "text",
            ColumnType::Time => "time",
            ColumnType::Timetz => "timetz",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Timestamptz => "timestamptz",
            ColumnType::Tsquery => "tsquery",
            ColumnType::Tsvector => "tsvector",
            ColumnType::TxidSnapshot => "txid_snapshot",
            ColumnType::Uuid => "uuid",
            ColumnType::Xml => "xml",
        }
    }

    /// Render the type with modifiers, e.g. `varchar(255)`.
    pub fn with_modifiers<S: AsRef<str>>(self, modifiers: &[S]) -> String {
        with_modifiers(self.as_str(), modifiers)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ColumnType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Format `keyword(m1,m2,...)`.
pub fn with_modifiers<S: AsRef<str>>(keyword: &str, modifiers: &[S]) -> String {
    let mut out = String::with_capacity(keyword.len() + 2 + modifiers.len() * 4);
    out.push_str(keyword);
    out.push('(');
    for (i, m) in modifiers.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(m.as_ref());
    }
    out.push(')');
    out
}
