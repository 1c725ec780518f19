//! Raw SQL queued at named positions of a statement.
//!
//! An [`Injection`] only stores "what got queued where". Which marker is
//! current, and the order markers are flushed in, belong to the builder.

use std::collections::BTreeMap;

/// Raw SQL fragments keyed by marker.
#[derive(Debug, Clone)]
pub struct Injection<M> {
    marker_sqls: BTreeMap<M, Vec<String>>,
}

impl<M> Default for Injection<M> {
    fn default() -> Self {
        Self {
            marker_sqls: BTreeMap::new(),
        }
    }
}

impl<M: Copy + Ord> Injection<M> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `sql` at `marker`, after anything already queued there.
    pub fn sql(&mut self, marker: M, sql: impl Into<String>) {
        self.marker_sqls.entry(marker).or_default().push(sql.into());
    }

    /// Fragments queued at `marker`, in insertion order.
    pub fn at(&self, marker: M) -> &[String] {
        self.marker_sqls
            .get(&marker)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check if nothing has been queued at any marker.
    pub fn is_empty(&self) -> bool {
        self.marker_sqls.is_empty()
    }

    /// Write the fragments queued at `marker` as ` a b c`.
    ///
    /// The leading space is skipped when `out` is still empty. Writes nothing
    /// when the marker is empty. Does not consume anything.
    pub fn write_to(&self, marker: M, out: &mut String) {
        for sql in self.at(marker) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(sql);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Marker {
        First,
        Second,
    }

    #[test]
    fn empty_marker_writes_nothing() {
        let inj: Injection<Marker> = Injection::new();
        let mut out = String::from("X");
        inj.write_to(Marker::First, &mut out);
        assert_eq!(out, "X");
        assert!(inj.is_empty());
    }

    #[test]
    fn joins_in_insertion_order() {
        let mut inj = Injection::new();
        inj.sql(Marker::First, "a");
        inj.sql(Marker::First, "b");
        let mut out = String::from("X");
        inj.write_to(Marker::First, &mut out);
        assert_eq!(out, "X a b");
    }

    #[test]
    fn markers_are_independent() {
        let mut inj = Injection::new();
        inj.sql(Marker::Second, "late");
        inj.sql(Marker::First, "early");
        assert_eq!(inj.at(Marker::First), ["early".to_string()]);
        assert_eq!(inj.at(Marker::Second), ["late".to_string()]);
    }

    #[test]
    fn write_is_repeatable() {
        let mut inj = Injection::new();
        inj.sql(Marker::Second, "x");
        let mut first = String::from("X");
        let mut second = String::from("X");
        inj.write_to(Marker::Second, &mut first);
        inj.write_to(Marker::Second, &mut second);
        assert_eq!(first, "X x");
        assert_eq!(first, second);
    }

    #[test]
    fn no_leading_space_at_start() {
        let mut inj = Injection::new();
        inj.sql(Marker::First, "a");
        inj.sql(Marker::First, "b");
        let mut out = String::new();
        inj.write_to(Marker::First, &mut out);
        assert_eq!(out, "a b");
    }
}
