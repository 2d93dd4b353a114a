//! Script parser: JavaScript/TypeScript source to a shape-level AST.
//!
//! Only the shapes component options are written in are modelled: object
//! literals, arrays, identifiers, strings, booleans, functions and calls.
//! Everything else is kept as [`Expr::Other`] with its grammar kind and text.
//! Comments that precede an object entry are attached to it as
//! `leading_comments`, in source order.

use super::{children, first_error, parse_error, parse_tree, text};
use crate::error::DocResult;
use tree_sitter::{Language, Node};

/// Script dialect, picked from the `<script lang="…">` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScriptLang {
    #[default]
    JavaScript,
    TypeScript,
    Tsx,
}

impl ScriptLang {
    pub fn from_attr(lang: Option<&str>) -> Self {
        match lang.map(str::to_ascii_lowercase).as_deref() {
            Some("ts" | "typescript") => Self::TypeScript,
            Some("tsx") => Self::Tsx,
            _ => Self::JavaScript,
        }
    }

    fn tree_sitter_language(&self) -> Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// A parsed script section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    /// The `export default` value, if the script has one
    pub default_export: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Object(Vec<Property>),
    Array(Vec<Expr>),
    Identifier(String),
    /// String literal contents, quotes removed
    String(String),
    Bool(bool),
    Function(Function),
    Call { callee: Box<Expr>, args: Vec<Expr> },
    Other { kind: String, text: String },
}

impl Expr {
    /// Short shape name used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Expr::Object(_) => "object",
            Expr::Array(_) => "array",
            Expr::Identifier(_) => "identifier",
            Expr::String(_) => "string",
            Expr::Bool(_) => "boolean",
            Expr::Function(_) => "function",
            Expr::Call { .. } => "call",
            Expr::Other { kind, .. } => kind,
        }
    }
}

/// One `key: value` (or method shorthand) entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Expr,
    /// Raw source of the value
    pub value_text: String,
    pub leading_comments: Vec<Comment>,
}

/// A comment with its delimiters removed but otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
    pub block: bool,
}

impl Comment {
    fn from_source(raw: &str) -> Self {
        if let Some(body) = raw.strip_prefix("/*") {
            Comment {
                value: body.strip_suffix("*/").unwrap_or(body).to_string(),
                block: true,
            }
        } else {
            Comment {
                value: raw.strip_prefix("//").unwrap_or(raw).to_string(),
                block: false,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    Block(Vec<Statement>),
    /// Arrow function with an expression body
    Expression(Box<Expr>),
}

impl Function {
    /// The value returned by the first top-level `return`, or the expression
    /// body of an arrow function.
    pub fn returned(&self) -> Option<&Expr> {
        match self {
            Function::Expression(expr) => Some(expr),
            Function::Block(statements) => statements
                .iter()
                .find_map(|s| match s {
                    Statement::Return(value) => Some(value.as_ref()),
                    Statement::Other => None,
                })
                .flatten(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Return(Option<Expr>),
    Other,
}

/// Parse a script section. Source with syntax errors is rejected.
pub fn parse(src: &str, lang: ScriptLang) -> DocResult<Module> {
    let tree = parse_tree(src, &lang.tree_sitter_language(), "script")?;
    let root = tree.root_node();
    if let Some(point) = first_error(root) {
        return Err(parse_error("script", point));
    }

    let lower = Lower { src };
    Ok(Module {
        default_export: lower.default_export(root),
    })
}

struct Lower<'a> {
    src: &'a str,
}

impl<'a> Lower<'a> {
    fn text(&self, node: Node) -> &'a str {
        text(node, self.src)
    }

    fn default_export(&self, program: Node) -> Option<Expr> {
        children(program)
            .into_iter()
            .filter(|stmt| stmt.kind() == "export_statement")
            .find(|stmt| children(*stmt).iter().any(|c| c.kind() == "default"))
            .and_then(|stmt| {
                stmt.child_by_field_name("value")
                    .or_else(|| stmt.child_by_field_name("declaration"))
            })
            .map(|value| self.expr(value))
    }

    fn expr(&self, node: Node) -> Expr {
        match node.kind() {
            "object" => Expr::Object(self.object(node)),
            "array" => Expr::Array(
                named_values(node)
                    .into_iter()
                    .map(|item| self.expr(item))
                    .collect(),
            ),
            "identifier" => Expr::Identifier(self.text(node).to_string()),
            "string" => Expr::String(unquote(self.text(node))),
            "template_string"
                if !children(node)
                    .iter()
                    .any(|c| c.kind() == "template_substitution") =>
            {
                Expr::String(unquote(self.text(node)))
            }
            "true" => Expr::Bool(true),
            "false" => Expr::Bool(false),
            "function" | "function_expression" | "function_declaration" | "generator_function"
            | "generator_function_declaration" | "arrow_function" => {
                Expr::Function(self.function(node))
            }
            "call_expression" => {
                let callee = node
                    .child_by_field_name("function")
                    .map(|f| self.expr(f))
                    .unwrap_or_else(|| self.other(node));
                let args = node
                    .child_by_field_name("arguments")
                    .map(|a| {
                        named_values(a)
                            .into_iter()
                            .map(|arg| self.expr(arg))
                            .collect()
                    })
                    .unwrap_or_default();
                Expr::Call {
                    callee: Box::new(callee),
                    args,
                }
            }
            // Wrappers that do not change the shape of the wrapped value
            "parenthesized_expression" | "as_expression" | "satisfies_expression"
            | "non_null_expression" => match named_values(node).first() {
                Some(inner) => self.expr(*inner),
                None => self.other(node),
            },
            _ => self.other(node),
        }
    }

    fn other(&self, node: Node) -> Expr {
        Expr::Other {
            kind: node.kind().to_string(),
            text: self.text(node).to_string(),
        }
    }

    fn object(&self, node: Node) -> Vec<Property> {
        let mut properties = Vec::new();
        let mut pending: Vec<Comment> = Vec::new();

        for child in children(node) {
            let (key, value, value_text) = match child.kind() {
                "comment" => {
                    pending.push(Comment::from_source(self.text(child)));
                    continue;
                }
                "pair" => {
                    let (Some(key), Some(value)) = (
                        child.child_by_field_name("key"),
                        child.child_by_field_name("value"),
                    ) else {
                        pending.clear();
                        continue;
                    };
                    (self.key(key), self.expr(value), self.text(value))
                }
                "method_definition" => {
                    let Some(name) = child.child_by_field_name("name") else {
                        pending.clear();
                        continue;
                    };
                    (
                        self.key(name),
                        Expr::Function(self.function(child)),
                        self.text(child),
                    )
                }
                "shorthand_property_identifier" => {
                    let name = self.text(child);
                    (name.to_string(), Expr::Identifier(name.to_string()), name)
                }
                "spread_element" => {
                    pending.clear();
                    continue;
                }
                // punctuation
                _ => continue,
            };

            properties.push(Property {
                key,
                value,
                value_text: value_text.to_string(),
                leading_comments: std::mem::take(&mut pending),
            });
        }

        properties
    }

    fn key(&self, node: Node) -> String {
        match node.kind() {
            "string" => unquote(self.text(node)),
            _ => self.text(node).to_string(),
        }
    }

    fn function(&self, node: Node) -> Function {
        match node.child_by_field_name("body") {
            Some(body) if body.kind() == "statement_block" => Function::Block(
                named_values(body)
                    .into_iter()
                    .map(|stmt| self.statement(stmt))
                    .collect(),
            ),
            Some(body) => Function::Expression(Box::new(self.expr(body))),
            None => Function::Block(Vec::new()),
        }
    }

    fn statement(&self, node: Node) -> Statement {
        match node.kind() {
            "return_statement" => {
                Statement::Return(named_values(node).first().map(|value| self.expr(*value)))
            }
            _ => Statement::Other,
        }
    }
}

/// Named children that are not comments.
fn named_values(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let nodes = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect();
    nodes
}

fn unquote(raw: &str) -> String {
    let bytes = raw.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open), Some(&close))
            if raw.len() >= 2 && open == close && matches!(open, b'"' | b'\'' | b'`') =>
        {
            raw[1..raw.len() - 1].to_string()
        }
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_object(src: &str) -> Vec<Property> {
        match parse(src, ScriptLang::JavaScript).unwrap().default_export {
            Some(Expr::Object(entries)) => entries,
            other => panic!("expected object export, got {:?}", other),
        }
    }

    #[test]
    fn default_export_object() {
        let entries = options_object("export default { name: 'Foo', size: 3 }");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "name");
        assert_eq!(entries[0].value, Expr::String("Foo".into()));
        assert_eq!(entries[1].value.kind(), "number");
        assert_eq!(entries[1].value_text, "3");
    }

    #[test]
    fn no_default_export() {
        let module = parse("export const a = 1;", ScriptLang::JavaScript).unwrap();
        assert!(module.default_export.is_none());
    }

    #[test]
    fn leading_comments_attach_to_next_entry() {
        let src = "export default {\n  // first\n  /* second */\n  a: 1,\n  b: 2, // trailing\n  c: 3\n}";
        let entries = options_object(src);
        assert_eq!(
            entries[0].leading_comments,
            vec![
                Comment { value: " first".into(), block: false },
                Comment { value: " second ".into(), block: true },
            ]
        );
        assert!(entries[1].leading_comments.is_empty());
        assert_eq!(entries[2].leading_comments[0].value, " trailing");
    }

    #[test]
    fn method_shorthand_is_function() {
        let entries = options_object("export default { clear() { return 1 } }");
        assert_eq!(entries[0].key, "clear");
        assert!(matches!(entries[0].value, Expr::Function(_)));
    }

    #[test]
    fn data_function_returns_object() {
        let entries = options_object("export default { data() { const x = 1; return { a: x } } }");
        let Expr::Function(func) = &entries[0].value else {
            panic!("data should be a function");
        };
        assert!(matches!(func.returned(), Some(Expr::Object(_))));
    }

    #[test]
    fn arrow_expression_body() {
        let entries = options_object("export default { data: () => ({ a: 1 }) }");
        let Expr::Function(func) = &entries[0].value else {
            panic!("data should be a function");
        };
        assert!(matches!(func.returned(), Some(Expr::Object(o)) if o.len() == 1));
    }

    #[test]
    fn define_component_call() {
        let module = parse(
            "import { defineComponent } from 'vue'\nexport default defineComponent({ name: 'X' })",
            ScriptLang::JavaScript,
        )
        .unwrap();
        let Some(Expr::Call { args, .. }) = module.default_export else {
            panic!("expected call export");
        };
        assert!(matches!(&args[0], Expr::Object(o) if o[0].key == "name"));
    }

    #[test]
    fn array_and_bool_values() {
        let entries = options_object("export default { t: [String, Number], r: true }");
        assert_eq!(
            entries[0].value,
            Expr::Array(vec![
                Expr::Identifier("String".into()),
                Expr::Identifier("Number".into())
            ])
        );
        assert_eq!(entries[1].value, Expr::Bool(true));
    }

    #[test]
    fn quoted_keys_are_unquoted() {
        let entries = options_object("export default { 'my-prop': 1 }");
        assert_eq!(entries[0].key, "my-prop");
    }

    #[test]
    fn typescript_script() {
        let module = parse(
            "export default { name: 'T', data(): { a: number } { return { a: 1 } } }",
            ScriptLang::TypeScript,
        )
        .unwrap();
        assert!(matches!(module.default_export, Some(Expr::Object(_))));
    }

    #[test]
    fn syntax_error_is_rejected() {
        let err = parse("export default { a: }", ScriptLang::JavaScript).unwrap_err();
        assert!(matches!(err, crate::error::DocError::Parse { section: "script", .. }));
    }

    #[test]
    fn lang_attribute() {
        assert_eq!(ScriptLang::from_attr(Some("ts")), ScriptLang::TypeScript);
        assert_eq!(ScriptLang::from_attr(Some("TSX")), ScriptLang::Tsx);
        assert_eq!(ScriptLang::from_attr(None), ScriptLang::JavaScript);
    }
}
