//! Single-file component loader: splits `<template>` and `<script>` sections.

use crate::error::DocResult;
use crate::parser::script::ScriptLang;
use crate::parser::{children, parse_tree, text};
use tree_sitter::Node;

/// The sections of one component file. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    /// Inner markup of the top-level `<template>`
    pub template: Option<String>,
    pub script: Option<ScriptSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSection {
    pub text: String,
    pub lang: ScriptLang,
}

/// Split a component file into its sections.
///
/// Only top-level blocks count. When several `<script>` blocks exist the first
/// one without `setup` wins, since that is where the options object lives.
pub fn split(src: &str) -> DocResult<Sections> {
    let tree = parse_tree(src, &tree_sitter_html::LANGUAGE.into(), "component")?;
    let root = tree.root_node();

    let mut sections = Sections::default();
    let mut setup_script: Option<ScriptSection> = None;

    for block in children(root) {
        match block.kind() {
            "element" if sections.template.is_none() && tag_name(block, src) == Some("template") => {
                sections.template = Some(inner_markup(block, src).to_string());
            }
            "script_element" if sections.script.is_none() => {
                let attrs = start_tag_attributes(block, src);
                let lang = attrs
                    .iter()
                    .find(|(name, _)| name == "lang")
                    .and_then(|(_, value)| value.as_deref());
                let section = ScriptSection {
                    text: children(block)
                        .into_iter()
                        .find(|c| c.kind() == "raw_text")
                        .map(|raw| text(raw, src).to_string())
                        .unwrap_or_default(),
                    lang: ScriptLang::from_attr(lang),
                };
                if attrs.iter().any(|(name, _)| name == "setup") {
                    if setup_script.is_none() {
                        setup_script = Some(section);
                    }
                } else {
                    sections.script = Some(section);
                }
            }
            _ => {}
        }
    }

    if sections.script.is_none() {
        sections.script = setup_script;
    }
    tracing::debug!(
        template = sections.template.is_some(),
        script = sections.script.is_some(),
        "split component"
    );
    Ok(sections)
}

fn start_tag(element: Node<'_>) -> Option<Node<'_>> {
    children(element)
        .into_iter()
        .find(|c| matches!(c.kind(), "start_tag" | "self_closing_tag"))
}

fn tag_name<'a>(element: Node, src: &'a str) -> Option<&'a str> {
    let open = start_tag(element)?;
    children(open)
        .into_iter()
        .find(|c| c.kind() == "tag_name")
        .map(|name| text(name, src))
}

fn start_tag_attributes(element: Node, src: &str) -> Vec<(String, Option<String>)> {
    let Some(open) = start_tag(element) else {
        return Vec::new();
    };
    children(open)
        .into_iter()
        .filter(|c| c.kind() == "attribute")
        .map(|attr| {
            let mut name = String::new();
            let mut value = None;
            for part in children(attr) {
                match part.kind() {
                    "attribute_name" => name = text(part, src).to_string(),
                    "attribute_value" => value = Some(text(part, src).to_string()),
                    "quoted_attribute_value" => {
                        value = children(part)
                            .into_iter()
                            .find(|c| c.kind() == "attribute_value")
                            .map(|v| text(v, src).to_string())
                            .or(Some(String::new()));
                    }
                    _ => {}
                }
            }
            (name, value)
        })
        .collect()
}

/// Source text between the start tag and the end tag.
fn inner_markup<'a>(element: Node, src: &'a str) -> &'a str {
    let parts = children(element);
    let start = parts
        .iter()
        .find(|c| c.kind() == "start_tag")
        .map(|c| c.end_byte());
    let Some(start) = start else {
        return "";
    };
    let end = parts
        .iter()
        .rev()
        .find(|c| c.kind() == "end_tag")
        .map(|c| c.start_byte())
        .unwrap_or_else(|| element.end_byte());
    src.get(start..end).unwrap_or_default()
}
