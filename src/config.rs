//! Extraction options and renderer column configuration.

use crate::error::{DocError, DocResult};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

pub const NO_DESCRIPTION: &str = "no description";
pub const TYPE_DELIMITER: &str = "、";

/// Knobs for the extraction passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Description used when a declaration has no comment
    pub no_description: String,
    /// Joins the members of an alternative-type array
    pub type_delimiter: String,
    /// Fail on the first problem instead of collecting warnings
    pub strict: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            no_description: NO_DESCRIPTION.to_string(),
            type_delimiter: TYPE_DELIMITER.to_string(),
            strict: false,
        }
    }
}

/// Ordered `field key → column label` pairs for one category.
pub type Columns = IndexMap<String, String>;

/// Column layout per category. Column order follows map order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub props: Columns,
    pub slots: Columns,
    pub data: Columns,
    pub methods: Columns,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            props: columns(&[("name", "Name"), ("desc", "Description"), ("type", "Type")]),
            slots: columns(&[("name", "Name"), ("desc", "Description")]),
            data: columns(&[("name", "Name"), ("desc", "Description")]),
            methods: columns(&[("name", "Name"), ("desc", "Description")]),
        }
    }
}

impl ColumnConfig {
    /// Decode a JSON column configuration. Omitted categories keep their defaults.
    pub fn from_json(text: &str) -> DocResult<Self> {
        serde_json::from_str(text).map_err(|e| DocError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> DocResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DocError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}

fn columns(pairs: &[(&str, &str)]) -> Columns {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_column_order() {
        let cfg = ColumnConfig::from_json(
            r#"{ "props": { "type": "类型", "name": "参数", "desc": "说明" } }"#,
        )
        .unwrap();
        let keys: Vec<&str> = cfg.props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "name", "desc"]);
        assert_eq!(cfg.props["name"], "参数");
    }

    #[test]
    fn omitted_categories_default() {
        let cfg = ColumnConfig::from_json(r#"{ "slots": { "name": "Slot" } }"#).unwrap();
        assert_eq!(cfg.methods, ColumnConfig::default().methods);
        assert_eq!(cfg.slots.len(), 1);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = ColumnConfig::from_json("{ props: ").unwrap_err();
        assert!(matches!(err, DocError::Config(_)));
    }
}
