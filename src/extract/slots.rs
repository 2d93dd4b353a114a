//! Template slot walker.

use super::{comment, Pass};
use crate::error::DocResult;
use crate::model::{SlotInfo, DEFAULT_SLOT};
use crate::parser::template::{Element, Template, TemplateNode};
use indexmap::IndexMap;

/// Collect every `<slot>` in the template, depth-first in document order.
///
/// A slot's description is the comment immediately before it among its
/// siblings. Returns `None` when the template declares no slots.
pub fn extract_slots(template: &Template, pass: &mut Pass) -> DocResult<Option<IndexMap<String, SlotInfo>>> {
    let mut slots = None;
    walk(&template.nodes, pass, &mut slots)?;
    Ok(slots)
}

fn walk(
    siblings: &[TemplateNode],
    pass: &mut Pass,
    slots: &mut Option<IndexMap<String, SlotInfo>>,
) -> DocResult<()> {
    for (index, node) in siblings.iter().enumerate() {
        let TemplateNode::Element(element) = node else {
            continue;
        };

        if is_slot(element) {
            let name = slot_name(element);
            let found = index
                .checked_sub(1)
                .and_then(|prev| match &siblings[prev] {
                    TemplateNode::Comment(text) => Some(comment::clean(text, false)),
                    _ => None,
                })
                .filter(|text| !text.is_empty());
            let desc = pass.describe("slot", &name, found)?;
            tracing::debug!(slot = %name, "found slot");
            slots
                .get_or_insert_with(IndexMap::new)
                .insert(name.clone(), SlotInfo { name, desc });
        }

        walk(&element.children, pass, slots)?;
    }
    Ok(())
}

fn is_slot(element: &Element) -> bool {
    element.tag == "slot"
}

/// Static `name`, else a bound `:name` expression, else the default slot key.
fn slot_name(element: &Element) -> String {
    ["name", ":name", "v-bind:name"]
        .iter()
        .filter_map(|attr| element.attribute(attr))
        .find_map(|attr| attr.value.clone().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_SLOT.to_string())
}
