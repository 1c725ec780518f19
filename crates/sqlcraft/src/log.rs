//! `tracing` events for builds (enabled by the `tracing` feature).

use crate::config::LogConfig;
use crate::ddl::CompiledStatement;
use crate::error::BuildResult;
use crate::flavor::Flavor;

/// Truncate a SQL string to at most `max_bytes` bytes, respecting UTF-8 boundaries.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_build(
    log: &LogConfig,
    statement: &'static str,
    flavor: Flavor,
    result: &BuildResult<CompiledStatement>,
) {
    match result {
        Ok(compiled) => {
            let sql = match log.max_sql_length {
                Some(max) if compiled.sql.len() > max => {
                    format!("{}...", truncate_sql_bytes(&compiled.sql, max))
                }
                _ => compiled.sql.clone(),
            };
            tracing::debug!(
                target: "sqlcraft.build",
                statement,
                %flavor,
                params = compiled.params.len(),
                sql = %sql,
                "built statement"
            );
        }
        Err(err) if err.is_desync() => {
            tracing::warn!(
                target: "sqlcraft.build",
                statement,
                %flavor,
                error = %err,
                "placeholders out of sync with bound values"
            );
        }
        Err(_) => {}
    }
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_build(
    _log: &LogConfig,
    _statement: &'static str,
    _flavor: Flavor,
    _result: &BuildResult<CompiledStatement>,
) {
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_sql_bytes("abc", 10), "abc");
        assert_eq!(truncate_sql_bytes("abcdef", 3), "abc");
        // 'é' is two bytes; cutting inside it backs off.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }
}
