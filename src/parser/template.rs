//! Template parser: markup to an element/comment/text tree.

use super::{children, first_error, parse_error, parse_tree, text};
use crate::error::{DocResult, Reporter};
use tree_sitter::Node;

/// Top-level nodes of a template section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub nodes: Vec<TemplateNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Element(Element),
    /// Comment body without `<!--` / `-->`
    Comment(String),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<TemplateNode>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` for a bare attribute such as `<slot hidden>`
    pub value: Option<String>,
}

/// Parse a template section.
///
/// The HTML grammar misreads some valid template syntax, such as `<` inside
/// an interpolation, so markup errors are recovered from and kept as
/// warnings that strict mode does not escalate.
pub fn parse(src: &str, reporter: &mut Reporter) -> DocResult<Template> {
    let tree = parse_tree(src, &tree_sitter_html::LANGUAGE.into(), "template")?;
    let root = tree.root_node();
    if let Some(point) = first_error(root) {
        reporter.note(parse_error("template", point));
    }

    let lower = Lower { src };
    Ok(Template {
        nodes: lower.nodes(root),
    })
}

struct Lower<'a> {
    src: &'a str,
}

impl<'a> Lower<'a> {
    fn nodes(&self, parent: Node) -> Vec<TemplateNode> {
        let mut out = Vec::new();
        for child in children(parent) {
            match child.kind() {
                "element" | "script_element" | "style_element" => {
                    let (element, trailing) = self.element(child);
                    out.push(TemplateNode::Element(element));
                    out.extend(trailing);
                }
                "comment" => out.push(TemplateNode::Comment(comment_body(text(child, self.src)))),
                "text" | "raw_text" | "entity" => {
                    out.push(TemplateNode::Text(text(child, self.src).to_string()))
                }
                // keep whatever the parser salvaged
                "ERROR" => out.extend(self.nodes(child)),
                _ => {}
            }
        }
        out
    }

    /// Lower an element. The grammar nests whatever follows a void or
    /// unclosed element (`<input>`, `<br>`) inside it; those nodes are
    /// returned separately so the caller keeps them as siblings.
    fn element(&self, node: Node) -> (Element, Vec<TemplateNode>) {
        let mut element = Element::default();
        let parts = children(node);
        let open = parts
            .iter()
            .copied()
            .find(|c| matches!(c.kind(), "start_tag" | "self_closing_tag"));
        let closed = parts
            .iter()
            .any(|c| matches!(c.kind(), "end_tag" | "self_closing_tag"));

        if let Some(open) = open {
            for part in children(open) {
                match part.kind() {
                    "tag_name" => element.tag = text(part, self.src).to_string(),
                    "attribute" => element.attributes.push(self.attribute(part)),
                    _ => {}
                }
            }
        }

        let nodes = self.nodes(node);
        if closed {
            element.children = nodes;
            (element, Vec::new())
        } else {
            (element, nodes)
        }
    }

    fn attribute(&self, node: Node) -> Attribute {
        let mut attribute = Attribute {
            name: String::new(),
            value: None,
        };
        for part in children(node) {
            match part.kind() {
                "attribute_name" => attribute.name = text(part, self.src).to_string(),
                "attribute_value" => attribute.value = Some(text(part, self.src).to_string()),
                "quoted_attribute_value" => {
                    let inner = children(part)
                        .into_iter()
                        .find(|c| c.kind() == "attribute_value")
                        .map(|v| text(v, self.src).to_string());
                    attribute.value = Some(inner.unwrap_or_default());
                }
                _ => {}
            }
        }
        attribute
    }
}

fn comment_body(raw: &str) -> String {
    let body = raw.strip_prefix("<!--").unwrap_or(raw);
    body.strip_suffix("-->").unwrap_or(body).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;

    fn parse_ok(src: &str) -> Template {
        let mut reporter = Reporter::new(false);
        let template = parse(src, &mut reporter).unwrap();
        assert!(reporter.into_warnings().is_empty());
        template
    }

    #[test]
    fn elements_comments_and_text() {
        let template = parse_ok("<div><!-- footer slot --><slot name=\"footer\"></slot>hi</div>");
        let TemplateNode::Element(div) = &template.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.tag, "div");
        assert_eq!(div.children.len(), 3);
        assert_eq!(div.children[0], TemplateNode::Comment(" footer slot ".into()));
        let TemplateNode::Element(slot) = &div.children[1] else {
            panic!("expected slot element");
        };
        assert_eq!(slot.tag, "slot");
        assert_eq!(
            slot.attribute("name").and_then(|a| a.value.as_deref()),
            Some("footer")
        );
        assert_eq!(div.children[2], TemplateNode::Text("hi".into()));
    }

    #[test]
    fn whitespace_is_not_a_node() {
        let template = parse_ok("<div>\n  <!-- a -->\n  <slot></slot>\n</div>");
        let TemplateNode::Element(div) = &template.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(div.children.len(), 2);
    }

    #[test]
    fn self_closing_and_bound_attributes() {
        let template = parse_ok("<slot :name=\"dynamic\" hidden />");
        let TemplateNode::Element(slot) = &template.nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(slot.tag, "slot");
        assert_eq!(slot.attribute(":name").and_then(|a| a.value.clone()), Some("dynamic".into()));
        assert_eq!(slot.attribute("hidden").map(|a| a.value.clone()), Some(None));
    }

    #[test]
    fn void_element_does_not_swallow_siblings() {
        let src = "<div><input v-model=\"value\"><!-- suffix --><slot name=\"suffix\"></slot></div>";
        let template = parse(src, &mut Reporter::new(false)).unwrap();
        let TemplateNode::Element(div) = &template.nodes[0] else {
            panic!("expected element");
        };
        let tags: Vec<&str> = div
            .children
            .iter()
            .map(|node| match node {
                TemplateNode::Element(e) => e.tag.as_str(),
                TemplateNode::Comment(_) => "#comment",
                TemplateNode::Text(_) => "#text",
            })
            .collect();
        assert_eq!(tags, ["input", "#comment", "slot"]);
        let TemplateNode::Element(input) = &div.children[0] else {
            panic!("expected input element");
        };
        assert!(input.children.is_empty());
    }

    #[test]
    fn interpolation_with_less_than_is_recovered() {
        let mut reporter = Reporter::new(true);
        let template = parse("<div><span>{{ a < b }}</span><!-- c --><slot name=\"c\"></slot></div>", &mut reporter).unwrap();
        assert!(!template.nodes.is_empty());
        assert!(matches!(
            reporter.into_warnings().as_slice(),
            [DocError::Parse { section: "template", .. }]
        ));
    }

    #[test]
    fn comment_body_strips_delimiters() {
        assert_eq!(comment_body("<!-- x -->"), " x ");
    }
}
