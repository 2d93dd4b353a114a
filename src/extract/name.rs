//! `name` extraction.

use crate::error::{DocError, DocResult};
use crate::parser::script::Expr;

/// The component name. An empty string counts as no name.
pub fn extract_name(value: &Expr) -> DocResult<Option<String>> {
    match value {
        Expr::String(name) => Ok(Some(name.clone()).filter(|n| !n.is_empty())),
        other => Err(DocError::malformed(
            "name",
            format!("expected a string literal, found {}", other.kind()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal() {
        assert_eq!(
            extract_name(&Expr::String("Foo".into())).unwrap(),
            Some("Foo".to_string())
        );
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(extract_name(&Expr::String(String::new())).unwrap(), None);
    }

    #[test]
    fn identifier_is_malformed() {
        assert!(extract_name(&Expr::Identifier("NAME".into())).is_err());
    }
}
