//! Parser module: tree-sitter backed script and template parsers.
//!
//! Both parsers lower the concrete syntax tree into small owned ASTs so the
//! extractors never depend on grammar node kinds.

pub mod script;
pub mod template;

use crate::error::{DocError, DocResult};
use tree_sitter::{Language, Node, Parser, Point, Tree};

/// Parse `text` with `language`, tagging failures with `section`.
pub(crate) fn parse_tree(text: &str, language: &Language, section: &'static str) -> DocResult<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| DocError::Grammar {
            section,
            message: e.to_string(),
        })?;
    parser.parse(text, None).ok_or_else(|| DocError::Grammar {
        section,
        message: "parser returned no tree".to_string(),
    })
}

/// Position of the first error or missing node below `node`, if any.
pub(crate) fn first_error(node: Node) -> Option<Point> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(point) = first_error(child) {
            return Some(point);
        }
    }
    Some(node.start_position())
}

pub(crate) fn parse_error(section: &'static str, point: Point) -> DocError {
    DocError::Parse {
        section,
        line: point.row + 1,
        column: point.column + 1,
    }
}

pub(crate) fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let nodes = node.children(&mut cursor).collect();
    nodes
}

pub(crate) fn text<'a>(node: Node, src: &'a str) -> &'a str {
    node.utf8_text(src.as_bytes()).unwrap_or_default()
}
