//! Error types for code generation.

use gtkforge_schema::GrammarError;
use thiserror::Error;

/// Error returned by code generation.
///
/// Every failure inside the pipeline surfaces as one of these variants; the
/// message always starts with `generation failed:`.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A class name or declaration violates the grammar.
    #[error("generation failed: {0}")]
    Grammar(#[from] GrammarError),

    /// The document template source is not a valid template.
    #[error("generation failed: malformed document template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// The document template could not be filled.
    #[error("generation failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl GenerationError {
    /// Returns the grammar error, if this failure came from parsing.
    #[must_use]
    pub fn grammar(&self) -> Option<&GrammarError> {
        match self {
            Self::Grammar(e) => Some(e),
            _ => None,
        }
    }
}
