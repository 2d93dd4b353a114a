//! GitHub-flavored markdown renderer.
//!
//! Output is the component name as a heading followed by one table per
//! non-empty category, always in the order props, slots, data, methods.

use crate::config::{ColumnConfig, Columns};
use crate::error::DocResult;
use crate::model::{ComponentInfo, Record};
use crate::render::Renderer;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

pub struct MarkdownRenderer;

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

impl Renderer for MarkdownRenderer {
    fn render(&self, info: &ComponentInfo, columns: &ColumnConfig) -> DocResult<String> {
        let mut sections: Vec<String> = Vec::new();

        if let Some(ref name) = info.name {
            sections.push(format!("# {}\n", name));
        }

        sections.extend(render_section("Props", &columns.props, info.props.as_ref()));
        sections.extend(render_section("Slots", &columns.slots, info.slots.as_ref()));
        sections.extend(render_section("Data", &columns.data, info.data.as_ref()));
        sections.extend(render_section("Methods", &columns.methods, info.methods.as_ref()));

        Ok(sections.join("\n"))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Heading plus table, or `None` for an absent or empty category.
fn render_section<R: Record>(
    title: &str,
    columns: &Columns,
    records: Option<&IndexMap<String, R>>,
) -> Option<String> {
    let records = records.filter(|r| !r.is_empty())?;
    if columns.is_empty() {
        return None;
    }
    Some(format!(
        "## {}\n\n{}",
        title,
        render_table(columns, records.values())
    ))
}

fn render_table<'a, R: Record + 'a>(columns: &Columns, records: impl Iterator<Item = &'a R>) -> String {
    let mut lines: Vec<String> = Vec::new();

    let labels: Vec<String> = columns.values().map(|label| escape_cell(label)).collect();
    lines.push(format!("| {} |", labels.join(" | ")));
    lines.push(format!("| {} |", vec!["---"; columns.len()].join(" | ")));

    for record in records {
        let cells: Vec<String> = columns
            .keys()
            .map(|key| escape_cell(&record.column(key).unwrap_or_default()))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Make a value safe to place inside a table cell: surrounding whitespace
/// is trimmed, `|` escaped and line breaks turned into `<br>`.
fn escape_cell(text: &str) -> String {
    let escaped = text.replace('|', "\\|");
    RE_LINE_BREAK.replace_all(escaped.trim(), "<br>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldInfo, PropInfo, SlotInfo};

    fn field(name: &str, desc: &str) -> FieldInfo {
        FieldInfo {
            name: name.into(),
            desc: desc.into(),
        }
    }

    fn foo() -> ComponentInfo {
        let mut props = IndexMap::new();
        props.insert(
            "size".to_string(),
            PropInfo {
                name: "size".into(),
                ty: Some("String".into()),
                desc: "size desc".into(),
                required: None,
                default: None,
            },
        );
        let mut slots = IndexMap::new();
        slots.insert(
            "footer".to_string(),
            SlotInfo {
                name: "footer".into(),
                desc: "footer slot".into(),
            },
        );
        let mut methods = IndexMap::new();
        methods.insert("clear".to_string(), field("clear", "clear desc"));
        ComponentInfo {
            name: Some("Foo".into()),
            props: Some(props),
            data: None,
            slots: Some(slots),
            methods: Some(methods),
        }
    }

    #[test]
    fn renders_tables_in_fixed_order() {
        let out = MarkdownRenderer
            .render(&foo(), &ColumnConfig::default())
            .unwrap();
        let expected = "# Foo

## Props

| Name | Description | Type |
| --- | --- | --- |
| size | size desc | String |

## Slots

| Name | Description |
| --- | --- |
| footer | footer slot |

## Methods

| Name | Description |
| --- | --- |
| clear | clear desc |
";
        assert_eq!(out, expected);
    }

    #[test]
    fn absent_slots_have_no_table() {
        let info = ComponentInfo {
            slots: None,
            ..foo()
        };
        let out = MarkdownRenderer.render(&info, &ColumnConfig::default()).unwrap();
        assert!(!out.contains("## Slots"));
        assert!(out.contains("## Props"));
    }

    #[test]
    fn empty_category_is_skipped() {
        let info = ComponentInfo {
            data: Some(IndexMap::new()),
            ..Default::default()
        };
        let out = MarkdownRenderer.render(&info, &ColumnConfig::default()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn configured_column_order_and_labels() {
        let columns = ColumnConfig::from_json(
            r#"{ "props": { "type": "类型", "name": "参数", "required": "必填", "desc": "说明" } }"#,
        )
        .unwrap();
        let out = MarkdownRenderer.render(&foo(), &columns).unwrap();
        assert!(out.contains("| 类型 | 参数 | 必填 | 说明 |\n| --- | --- | --- | --- |\n| String | size |  | size desc |\n"));
    }

    #[test]
    fn cells_are_escaped() {
        assert_eq!(escape_cell("a | b"), "a \\| b");
        assert_eq!(escape_cell("line one\nline two"), "line one<br>line two");
        assert_eq!(escape_cell("  padded\n"), "padded");
    }
}
