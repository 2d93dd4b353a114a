//! `methods` extraction.

use super::{comment, Pass};
use crate::error::{DocError, DocResult};
use crate::model::FieldInfo;
use crate::parser::script::Expr;
use indexmap::IndexMap;

/// One [`FieldInfo`] per entry of the `methods` object. Bodies are not looked at.
pub fn extract_methods(value: &Expr, pass: &mut Pass) -> DocResult<IndexMap<String, FieldInfo>> {
    let Expr::Object(entries) = value else {
        return Err(DocError::malformed(
            "methods",
            format!("expected an object literal, found {}", value.kind()),
        ));
    };

    let mut methods = IndexMap::new();
    for entry in entries {
        let desc = pass.describe("method", &entry.key, comment::resolve(&entry.leading_comments))?;
        methods.insert(
            entry.key.clone(),
            FieldInfo {
                name: entry.key.clone(),
                desc,
            },
        );
    }
    Ok(methods)
}
