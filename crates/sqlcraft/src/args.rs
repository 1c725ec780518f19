//! Argument compiler.
//!
//! Values bound while a statement is assembled are stored in [`Args`] and
//! stand in the SQL text as synthetic `${N}` tokens (`N` is the 0-based
//! registration index). [`Args::compile`] parses the assembled text into
//! literal segments and value slots, then renders each slot with the
//! flavor's placeholder, numbered left to right in final text order.
//!
//! Token grammar inside assembled text:
//!
//! - `${N}` is a value slot;
//! - `$$` is a literal `$` (see [`escape`](crate::escape));
//! - `${` followed by anything else is a [`BuildError::MalformedPlaceholder`];
//! - any other `$` is kept as is, so hand-written `$1` passes through.

use crate::ddl::CompiledStatement;
use crate::error::{BuildError, BuildResult};
use crate::flavor::Flavor;
use crate::param::Param;
use tokio_postgres::types::ToSql;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Raw(&'a str),
    Slot(usize),
}

/// Append-only store of bound values.
#[derive(Clone, Debug, Default)]
pub struct Args {
    values: Vec<Param>,
}

impl Args {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Bind a value and return its synthetic placeholder token.
    ///
    /// Every call yields a new token, even for equal values.
    pub fn add<T: ToSql + Send + Sync + 'static>(&mut self, value: T) -> String {
        self.add_param(Param::new(value))
    }

    /// Bind a pre-wrapped [`Param`] and return its synthetic placeholder token.
    pub fn add_param(&mut self, param: Param) -> String {
        let index = self.values.len();
        self.values.push(param);
        format!("${{{index}}}")
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no value has been bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value registered under token index `index`.
    pub fn value(&self, index: usize) -> Option<&Param> {
        self.values.get(index)
    }

    /// Resolve every `${N}` token in `text` for `flavor`.
    ///
    /// `initial` values come first in the returned params and take the lowest
    /// ordinals; slot ordinals start right after them.
    pub fn compile(
        &self,
        text: &str,
        flavor: Flavor,
        initial: &[Param],
    ) -> BuildResult<CompiledStatement> {
        let segments = self.parse(text)?;

        let mut sql = String::with_capacity(text.len());
        let mut params = Vec::with_capacity(initial.len() + segments.len() / 2);
        params.extend_from_slice(initial);

        for segment in segments {
            match segment {
                Segment::Raw(s) => sql.push_str(s),
                Segment::Slot(index) => {
                    params.push(self.values[index].clone());
                    flavor.write_placeholder(params.len(), &mut sql);
                }
            }
        }

        Ok(CompiledStatement::new(sql, params))
    }

    fn parse<'a>(&self, text: &'a str) -> BuildResult<Vec<Segment<'a>>> {
        let bytes = text.as_bytes();
        let mut segments = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] != b'$' {
                i += 1;
                continue;
            }

            match bytes.get(i + 1) {
                Some(b'$') => {
                    // `$$` -> `$`: keep the first byte, drop the second.
                    segments.push(Segment::Raw(&text[start..=i]));
                    i += 2;
                    start = i;
                }
                Some(b'{') => {
                    let digits_start = i + 2;
                    let digits_len = bytes[digits_start..]
                        .iter()
                        .take_while(|b| b.is_ascii_digit())
                        .count();
                    let close = digits_start + digits_len;
                    if digits_len == 0 || bytes.get(close) != Some(&b'}') {
                        return Err(BuildError::MalformedPlaceholder { offset: i });
                    }

                    let index: usize = text[digits_start..close]
                        .parse()
                        .map_err(|_| BuildError::MalformedPlaceholder { offset: i })?;
                    if index >= self.values.len() {
                        return Err(BuildError::UnknownPlaceholder {
                            index,
                            registered: self.values.len(),
                        });
                    }

                    if start < i {
                        segments.push(Segment::Raw(&text[start..i]));
                    }
                    segments.push(Segment::Slot(index));
                    i = close + 1;
                    start = i;
                }
                _ => i += 1,
            }
        }

        if start < text.len() {
            segments.push(Segment::Raw(&text[start..]));
        }
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug_params(params: &[Param]) -> Vec<String> {
        params.iter().map(|p| format!("{p:?}")).collect()
    }

    #[test]
    fn add_returns_fresh_tokens() {
        let mut args = Args::new();
        assert_eq!(args.add(1_i32), "${0}");
        assert_eq!(args.add(1_i32), "${1}");
        assert_eq!(args.add("x"), "${2}");
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn numbers_in_text_order_not_registration_order() {
        let mut args = Args::new();
        let a = args.add("a");
        let b = args.add("b");
        let text = format!("x = {b} AND y = {a}");

        let out = args.compile(&text, Flavor::PostgreSql, &[]).unwrap();
        assert_eq!(out.sql, "x = $1 AND y = $2");
        assert_eq!(debug_params(&out.params), vec!["\"b\"", "\"a\""]);
    }

    #[test]
    fn repeated_token_consumes_new_ordinal() {
        let mut args = Args::new();
        let v = args.add(7_i64);
        let text = format!("{v}, {v}");

        let out = args.compile(&text, Flavor::SqlServer, &[]).unwrap();
        assert_eq!(out.sql, "@p1, @p2");
        assert_eq!(out.params.len(), 2);
        assert!(out.params[0].ptr_eq(&out.params[1]));
    }

    #[test]
    fn initial_args_take_lowest_ordinals() {
        let mut args = Args::new();
        let v = args.add("v");
        let text = format!("a = $1 AND b = {v}");

        let out = args
            .compile(&text, Flavor::PostgreSql, &[Param::new(10_i32)])
            .unwrap();
        assert_eq!(out.sql, "a = $1 AND b = $2");
        assert_eq!(debug_params(&out.params), vec!["10", "\"v\""]);
    }

    #[test]
    fn question_mark_flavor() {
        let mut args = Args::new();
        let a = args.add(1_i32);
        let b = args.add(2_i32);
        let out = args
            .compile(&format!("({a}, {b})"), Flavor::MySql, &[])
            .unwrap();
        assert_eq!(out.sql, "(?, ?)");
        assert_eq!(debug_params(&out.params), vec!["1", "2"]);
    }

    #[test]
    fn unused_values_are_not_emitted() {
        let mut args = Args::new();
        args.add(1_i32);
        let out = args.compile("SELECT 1", Flavor::PostgreSql, &[]).unwrap();
        assert_eq!(out.sql, "SELECT 1");
        assert!(out.params.is_empty());
    }

    #[test]
    fn dollar_escapes_and_plain_dollars() {
        let args = Args::new();
        let out = args
            .compile("a$$b ${x} $1 $", Flavor::PostgreSql, &[])
            .unwrap_err();
        assert_eq!(out, BuildError::MalformedPlaceholder { offset: 5 });

        let out = args
            .compile("price$$ $1 $tag$ end$", Flavor::PostgreSql, &[])
            .unwrap();
        assert_eq!(out.sql, "price$ $1 $tag$ end$");
        assert!(out.params.is_empty());
    }

    #[test]
    fn escaped_brace_is_not_a_token() {
        let args = Args::new();
        let out = args.compile("$${0}", Flavor::PostgreSql, &[]).unwrap();
        assert_eq!(out.sql, "${0}");
    }

    #[test]
    fn truncated_token_is_an_error() {
        let mut args = Args::new();
        args.add(1_i32);
        for text in ["x ${", "x ${0", "x ${}", "x ${0 }"] {
            let err = args.compile(text, Flavor::PostgreSql, &[]).unwrap_err();
            assert_eq!(err, BuildError::MalformedPlaceholder { offset: 2 }, "{text}");
        }
    }

    #[test]
    fn unregistered_token_is_an_error() {
        let mut args = Args::new();
        args.add(1_i32);
        let err = args.compile("${0} ${1}", Flavor::PostgreSql, &[]).unwrap_err();
        assert_eq!(err, BuildError::UnknownPlaceholder { index: 1, registered: 1 });
        assert!(err.is_desync());
    }

    #[test]
    fn handles_multibyte_text() {
        let mut args = Args::new();
        let v = args.add("名前");
        let out = args
            .compile(&format!("comment = 'héllo' AND name = {v} -- ✓"), Flavor::Oracle, &[])
            .unwrap();
        assert_eq!(out.sql, "comment = 'héllo' AND name = :1 -- ✓");
    }
}
