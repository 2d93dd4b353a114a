//! Renderer module: trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::config::ColumnConfig;
use crate::error::{DocError, DocResult};
use crate::model::ComponentInfo;

/// Trait for rendering extracted component metadata into an output format.
pub trait Renderer: Send + Sync {
    fn render(&self, info: &ComponentInfo, columns: &ColumnConfig) -> DocResult<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> DocResult<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(DocError::Config(format!(
            "unknown format: {}. Use markdown or json",
            format
        ))),
    }
}
