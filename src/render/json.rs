//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the `ComponentInfo` model directly; absent categories are `null`.
//! Column configuration does not apply.

use crate::config::ColumnConfig;
use crate::error::{DocError, DocResult};
use crate::model::ComponentInfo;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, info: &ComponentInfo, _columns: &ColumnConfig) -> DocResult<String> {
        let mut out = serde_json::to_string_pretty(info)
            .map_err(|e| DocError::Serialization(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldInfo;
    use indexmap::IndexMap;

    #[test]
    fn absent_categories_are_null() {
        let mut methods = IndexMap::new();
        methods.insert(
            "clear".to_string(),
            FieldInfo {
                name: "clear".into(),
                desc: "clear desc".into(),
            },
        );
        let info = ComponentInfo {
            name: Some("Foo".into()),
            methods: Some(methods),
            ..Default::default()
        };
        let out = JsonRenderer.render(&info, &ColumnConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "Foo");
        assert!(value["props"].is_null());
        assert!(value["slots"].is_null());
        assert_eq!(value["methods"]["clear"]["desc"], "clear desc");
    }

    #[test]
    fn field_order_is_stable() {
        let out = JsonRenderer
            .render(&ComponentInfo::default(), &ColumnConfig::default())
            .unwrap();
        let keys: Vec<usize> = ["\"name\"", "\"props\"", "\"data\"", "\"slots\"", "\"methods\""]
            .iter()
            .map(|k| out.find(k).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}
