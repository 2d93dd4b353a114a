//! Extraction passes: script AST and template tree to [`ComponentInfo`] parts.
//!
//! [`ComponentInfo`]: crate::model::ComponentInfo

pub mod comment;
pub mod data;
pub mod methods;
pub mod name;
pub mod props;
pub mod script;
pub mod slots;

use crate::config::ExtractOptions;
use crate::error::{DocError, DocResult, Reporter};

/// State owned by one extraction pass: the options it runs under and the
/// warnings it has collected.
pub struct Pass<'a> {
    options: &'a ExtractOptions,
    reporter: Reporter,
}

impl<'a> Pass<'a> {
    pub fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            reporter: Reporter::new(options.strict),
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        self.options
    }

    pub fn reporter(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    pub fn report(&mut self, err: DocError) -> DocResult<()> {
        self.reporter.report(err)
    }

    /// Apply the description policy to a resolved comment: a missing comment
    /// becomes the "no description" text plus a warning, or an error in
    /// strict mode.
    pub fn describe(&mut self, category: &str, key: &str, found: Option<String>) -> DocResult<String> {
        match found {
            Some(desc) => Ok(desc),
            None => {
                self.report(DocError::missing_description(category, key))?;
                Ok(self.options.no_description.clone())
            }
        }
    }

    pub fn into_warnings(self) -> Vec<DocError> {
        self.reporter.into_warnings()
    }
}
