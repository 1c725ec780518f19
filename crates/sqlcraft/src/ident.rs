//! Identifier escaping for builder text.
//!
//! Builder text reserves `$` for synthetic placeholders (`${N}`), so names
//! written into it go through [`escape`] first: every `$` is doubled and
//! compiles back to a single `$`.
//!
//! # Example
//! ```
//! use sqlcraft::escape;
//!
//! assert_eq!(escape("public.users"), "public.users");
//! assert_eq!(escape("cost$"), "cost$$");
//! ```

/// Escape `$` in an identifier so it survives compilation verbatim.
pub fn escape(ident: &str) -> String {
    if !ident.contains('$') {
        return ident.to_string();
    }
    ident.replace('$', "$$")
}

/// Escape every identifier in `idents`.
pub fn escape_all<I, S>(idents: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    idents.into_iter().map(|s| escape(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use crate::flavor::Flavor;

    #[test]
    fn plain_names_are_unchanged() {
        assert_eq!(escape("users"), "users");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn doubles_dollars() {
        assert_eq!(escape("a$b${0}"), "a$$b$${0}");
    }

    #[test]
    fn escape_all_keeps_order() {
        assert_eq!(escape_all(["a$", "b"]), vec!["a$$", "b"]);
    }

    #[test]
    fn escaped_text_compiles_back_verbatim() {
        let raw = "weird${0}$name$$";
        let out = Args::new()
            .compile(&escape(raw), Flavor::PostgreSql, &[])
            .unwrap();
        assert_eq!(out.sql, raw);
        assert!(out.params.is_empty());
    }
}
