//! Error taxonomy for extraction and rendering.
//!
//! The same type doubles as the warning type: in tolerant mode a
//! [`Reporter`] records problems and lets extraction continue, in strict mode
//! the first reported problem aborts the run.

use thiserror::Error;

/// Result type for sfcdoc operations
pub type DocResult<T> = Result<T, DocError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// The script lacks a default-exported options object, or a recognised
    /// field has a shape its extractor does not accept.
    #[error("malformed source in `{field}`: {reason}")]
    MalformedSource { field: String, reason: String },

    /// A declaration has no adjacent comment to describe it.
    #[error("{category} `{key}` has no description comment")]
    MissingDescription { category: String, key: String },

    /// A prop options object without a `type` field.
    #[error("prop `{key}` declares no type")]
    MissingType { key: String },

    /// A parser rejected one of the component's sections.
    #[error("{section} parse error at {line}:{column}")]
    Parse {
        section: &'static str,
        line: usize,
        column: usize,
    },

    /// A tree-sitter grammar could not be loaded.
    #[error("failed to load {section} grammar: {message}")]
    Grammar {
        section: &'static str,
        message: String,
    },

    /// Column configuration could not be read or decoded.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DocError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DocError::MalformedSource {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_description(category: impl Into<String>, key: impl Into<String>) -> Self {
        DocError::MissingDescription {
            category: category.into(),
            key: key.into(),
        }
    }
}

/// Collects non-fatal problems for a single extraction pass.
///
/// Each pass owns its reporter; the pipeline concatenates the warnings once
/// both passes are done.
#[derive(Debug, Default)]
pub struct Reporter {
    strict: bool,
    warnings: Vec<DocError>,
}

impl Reporter {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            warnings: Vec::new(),
        }
    }

    /// Record a problem. Strict mode hands it straight back as an error.
    pub fn report(&mut self, err: DocError) -> DocResult<()> {
        if self.strict {
            return Err(err);
        }
        tracing::debug!(%err, "recorded warning");
        self.warnings.push(err);
        Ok(())
    }

    /// Record a problem the input recovered from. Never escalated, even in
    /// strict mode.
    pub fn note(&mut self, err: DocError) {
        tracing::debug!(%err, "recorded recovered problem");
        self.warnings.push(err);
    }

    pub fn into_warnings(self) -> Vec<DocError> {
        self.warnings
    }
}
