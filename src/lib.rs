//! sfcdoc: documentation tables from annotated single-file components.
//!
//! The pipeline has two independent passes over one component:
//!
//! - the **script pass** parses `<script>` and reads `name`, `props`, `data`
//!   and `methods` from the default-exported options object;
//! - the **template pass** parses `<template>` and collects `<slot>`s.
//!
//! Each declaration's description is the comment written right before it.
//! The merged [`ComponentInfo`] is then handed to a [`Renderer`].
//!
//! ```ignore
//! let sections = sfcdoc::source::split(&text)?;
//! let extraction = sfcdoc::extract_component(&sections, &ExtractOptions::default())?;
//! let markdown = MarkdownRenderer.render(&extraction.info, &ColumnConfig::default())?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

pub use config::{ColumnConfig, ExtractOptions};
pub use error::{DocError, DocResult};
pub use model::{ComponentInfo, Extraction};
pub use render::Renderer;

use extract::Pass;
use indexmap::IndexMap;
use model::{ScriptInfo, SlotInfo};
use source::Sections;

/// Rendered documentation together with the extraction it came from.
#[derive(Debug, Clone)]
pub struct Documented {
    pub extraction: Extraction,
    pub output: String,
}

/// Run both extraction passes over an already split component.
///
/// The passes share nothing and run in parallel. A missing section simply
/// leaves its fields empty.
pub fn extract_component(sections: &Sections, options: &ExtractOptions) -> DocResult<Extraction> {
    let (script, template) = rayon::join(
        || script_pass(sections, options),
        || template_pass(sections, options),
    );
    let (script_info, mut warnings) = script?;
    let (slots, template_warnings) = template?;
    warnings.extend(template_warnings);

    Ok(Extraction {
        info: ComponentInfo::merge(script_info, slots),
        warnings,
    })
}

/// Split a component file and extract its metadata.
pub fn extract(src: &str, options: &ExtractOptions) -> DocResult<Extraction> {
    let sections = source::split(src)?;
    extract_component(&sections, options)
}

/// Extract and render a component file in one go.
pub fn document(
    src: &str,
    options: &ExtractOptions,
    columns: &ColumnConfig,
    renderer: &dyn Renderer,
) -> DocResult<Documented> {
    let extraction = extract(src, options)?;
    let output = renderer.render(&extraction.info, columns)?;
    Ok(Documented { extraction, output })
}

fn script_pass(sections: &Sections, options: &ExtractOptions) -> DocResult<(ScriptInfo, Vec<DocError>)> {
    let Some(script) = &sections.script else {
        tracing::debug!("component has no script section");
        return Ok((ScriptInfo::default(), Vec::new()));
    };
    let module = parser::script::parse(&script.text, script.lang)?;
    let mut pass = Pass::new(options);
    let info = extract::script::extract_script(&module, &mut pass)?;
    Ok((info, pass.into_warnings()))
}

type Slots = Option<IndexMap<String, SlotInfo>>;

fn template_pass(sections: &Sections, options: &ExtractOptions) -> DocResult<(Slots, Vec<DocError>)> {
    let Some(markup) = &sections.template else {
        tracing::debug!("component has no template section");
        return Ok((None, Vec::new()));
    };
    let mut pass = Pass::new(options);
    let template = parser::template::parse(markup, pass.reporter())?;
    let slots = extract::slots::extract_slots(&template, &mut pass)?;
    Ok((slots, pass.into_warnings()))
}
