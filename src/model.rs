//! Data model for extracted component metadata, independent of output format.

use indexmap::IndexMap;
use serde::Serialize;

/// Key used for a slot without an explicit name.
pub const DEFAULT_SLOT: &str = "-";

/// Everything extracted from one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    pub name: Option<String>,
    pub props: Option<IndexMap<String, PropInfo>>,
    pub data: Option<IndexMap<String, FieldInfo>>,
    pub slots: Option<IndexMap<String, SlotInfo>>,
    pub methods: Option<IndexMap<String, FieldInfo>>,
}

/// Fields filled in by the script pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptInfo {
    pub name: Option<String>,
    pub props: Option<IndexMap<String, PropInfo>>,
    pub data: Option<IndexMap<String, FieldInfo>>,
    pub methods: Option<IndexMap<String, FieldInfo>>,
}

impl ComponentInfo {
    /// Combine the disjoint results of the script and template passes.
    pub fn merge(script: ScriptInfo, slots: Option<IndexMap<String, SlotInfo>>) -> Self {
        Self {
            name: script.name,
            props: script.props,
            data: script.data,
            slots,
            methods: script.methods,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropInfo {
    pub name: String,
    /// `None` when the prop's options object declares no `type`
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Raw source text of the `default` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Shared record shape for state entries and methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotInfo {
    pub name: String,
    pub desc: String,
}

/// A record the table renderer can read columns from.
pub trait Record {
    /// Value of the column `key`, or `None` when this record has no such value.
    fn column(&self, key: &str) -> Option<String>;
}

impl Record for PropInfo {
    fn column(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "type" => self.ty.clone(),
            "desc" => Some(self.desc.clone()),
            "required" => self.required.map(|r| r.to_string()),
            "default" => self.default.clone(),
            _ => None,
        }
    }
}

impl Record for FieldInfo {
    fn column(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "desc" => Some(self.desc.clone()),
            _ => None,
        }
    }
}

impl Record for SlotInfo {
    fn column(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "desc" => Some(self.desc.clone()),
            _ => None,
        }
    }
}

/// Result of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub info: ComponentInfo,
    /// Problems recorded in tolerant mode, script pass first
    pub warnings: Vec<crate::error::DocError>,
}
