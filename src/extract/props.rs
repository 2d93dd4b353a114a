//! `props` extraction.

use super::{comment, Pass};
use crate::error::{DocError, DocResult};
use crate::model::PropInfo;
use crate::parser::script::Expr;
use indexmap::IndexMap;

/// Label used when a prop's type cannot be read from its node shape.
pub const ANY_TYPE: &str = "Any";

/// Extract one [`PropInfo`] per entry of the `props` object.
///
/// An entry's value is either an options object (`{ type, required, default }`)
/// or the type itself (`size: String`, `value: [String, Number]`).
pub fn extract_props(value: &Expr, pass: &mut Pass) -> DocResult<IndexMap<String, PropInfo>> {
    let Expr::Object(entries) = value else {
        return Err(DocError::malformed(
            "props",
            format!("expected an object literal, found {}", value.kind()),
        ));
    };

    let mut props = IndexMap::new();
    for entry in entries {
        let desc = pass.describe("prop", &entry.key, comment::resolve(&entry.leading_comments))?;
        let mut prop = PropInfo {
            name: entry.key.clone(),
            ty: None,
            desc,
            required: None,
            default: None,
        };

        match &entry.value {
            Expr::Object(options) => {
                for option in options {
                    match option.key.as_str() {
                        "type" => {
                            prop.ty = Some(type_label(&option.value, &pass.options().type_delimiter))
                        }
                        "required" => {
                            if let Expr::Bool(required) = option.value {
                                prop.required = Some(required);
                            }
                        }
                        "default" => prop.default = Some(option.value_text.clone()),
                        _ => {}
                    }
                }
                if prop.ty.is_none() {
                    pass.report(DocError::MissingType {
                        key: entry.key.clone(),
                    })?;
                }
            }
            shorthand => prop.ty = Some(type_label(shorthand, &pass.options().type_delimiter)),
        }

        props.insert(entry.key.clone(), prop);
    }
    Ok(props)
}

/// Type label for a `type` node: an identifier's name, the identifiers of an
/// array joined by `delimiter`, or [`ANY_TYPE`].
pub fn type_label(node: &Expr, delimiter: &str) -> String {
    match node {
        Expr::Identifier(name) => name.clone(),
        Expr::Array(items) => {
            let names: Vec<&str> = items
                .iter()
                .filter_map(|item| match item {
                    Expr::Identifier(name) => Some(name.as_str()),
                    _ => None,
                })
                .collect();
            if names.is_empty() {
                ANY_TYPE.to_string()
            } else {
                names.join(delimiter)
            }
        }
        other => {
            tracing::debug!(kind = other.kind(), "unresolved prop type");
            ANY_TYPE.to_string()
        }
    }
}
