//! `data` extraction.

use super::{comment, Pass};
use crate::error::{DocError, DocResult};
use crate::model::FieldInfo;
use crate::parser::script::Expr;
use indexmap::IndexMap;

/// One [`FieldInfo`] per entry of the object returned by the `data` function.
///
/// Descriptions come from comments on the returned object's entries, not on
/// the `data` field itself.
pub fn extract_data(value: &Expr, pass: &mut Pass) -> DocResult<IndexMap<String, FieldInfo>> {
    let Expr::Function(function) = value else {
        return Err(DocError::malformed(
            "data",
            format!("expected a function, found {}", value.kind()),
        ));
    };
    let returned = function
        .returned()
        .ok_or_else(|| DocError::malformed("data", "function returns no value"))?;
    let Expr::Object(entries) = returned else {
        return Err(DocError::malformed(
            "data",
            format!("expected the function to return an object literal, found {}", returned.kind()),
        ));
    };

    let mut data = IndexMap::new();
    for entry in entries {
        let desc = pass.describe("data", &entry.key, comment::resolve(&entry.leading_comments))?;
        data.insert(
            entry.key.clone(),
            FieldInfo {
                name: entry.key.clone(),
                desc,
            },
        );
    }
    Ok(data)
}
