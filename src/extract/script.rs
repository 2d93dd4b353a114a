//! Script metadata driver: dispatches the options object's fields.

use super::{data, methods, name, props, Pass};
use crate::error::{DocError, DocResult};
use crate::model::ScriptInfo;
use crate::parser::script::{Expr, Module, Property};
use indexmap::IndexMap;

const EXPORT_DEFAULT: &str = "export default";

/// Options-object fields that carry documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Props,
    Methods,
    Data,
}

impl FieldKind {
    /// `None` for fields that are not documented (hooks, `computed`, `watch`, …).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "props" => Some(Self::Props),
            "methods" => Some(Self::Methods),
            "data" => Some(Self::Data),
            _ => None,
        }
    }
}

/// Extract name, props, data and methods from a parsed script.
///
/// A missing or non-object default export fails the run. A field whose shape
/// is not understood is reported through the pass and leaves its category
/// empty; the other fields are still extracted.
pub fn extract_script(module: &Module, pass: &mut Pass) -> DocResult<ScriptInfo> {
    let entries = options_object(module)?;
    let mut info = ScriptInfo::default();

    for entry in entries {
        let Some(kind) = FieldKind::from_key(&entry.key) else {
            tracing::debug!(field = %entry.key, "ignoring options field");
            continue;
        };

        let outcome = match kind {
            FieldKind::Name => name::extract_name(&entry.value).map(|n| info.name = n),
            FieldKind::Props => {
                props::extract_props(&entry.value, pass).map(|p| info.props = non_empty(p))
            }
            FieldKind::Methods => {
                methods::extract_methods(&entry.value, pass).map(|m| info.methods = non_empty(m))
            }
            FieldKind::Data => {
                data::extract_data(&entry.value, pass).map(|d| info.data = non_empty(d))
            }
        };

        if let Err(err) = outcome {
            pass.report(err)?;
        }
    }

    Ok(info)
}

/// The component options object: the default export itself, or the first
/// argument of a wrapping call such as `defineComponent({...})`.
fn options_object(module: &Module) -> DocResult<&[Property]> {
    let export = module
        .default_export
        .as_ref()
        .ok_or_else(|| DocError::malformed(EXPORT_DEFAULT, "no default export found"))?;

    match export {
        Expr::Object(entries) => Ok(entries),
        Expr::Call { callee, args } => match args.first() {
            Some(Expr::Object(entries)) => Ok(entries),
            _ => Err(DocError::malformed(
                EXPORT_DEFAULT,
                format!(
                    "expected the first argument of `{}` to be an options object",
                    callee_name(callee)
                ),
            )),
        },
        other => Err(DocError::malformed(
            EXPORT_DEFAULT,
            format!("expected a component options object, found {}", other.kind()),
        )),
    }
}

fn callee_name(callee: &Expr) -> &str {
    match callee {
        Expr::Identifier(name) | Expr::Other { text: name, .. } => name.as_str(),
        other => other.kind(),
    }
}

fn non_empty<V>(map: IndexMap<String, V>) -> Option<IndexMap<String, V>> {
    (!map.is_empty()).then_some(map)
}
