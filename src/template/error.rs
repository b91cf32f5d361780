use thiserror::Error;

/// Errors raised while parsing template source.
///
/// Offsets are byte offsets into the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Unclosed placeholder starting at offset {offset}")]
    UnclosedPlaceholder { offset: usize },

    #[error("Invalid placeholder name '{name}' at offset {offset}")]
    InvalidPlaceholderName { name: String, offset: usize },

    #[error("Tag <{name}> opened at offset {offset} is never closed")]
    UnclosedTag { name: String, offset: usize },

    #[error("Closing tag </{found}> at offset {offset} does not match <{expected}>")]
    MismatchedClosingTag { expected: String, found: String, offset: usize },

    #[error("Closing tag </{name}> at offset {offset} has no opening tag")]
    UnexpectedClosingTag { name: String, offset: usize },

    #[error("Unterminated quoted literal starting at offset {offset}")]
    UnterminatedQuote { offset: usize },
}

/// Errors raised while rendering a template against its values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("No value supplied for placeholder '{placeholder}'")]
    MissingInterpolationValue { placeholder: String },

    #[error("Placeholder '{placeholder}' expects a {expected} value, got {found}")]
    InvalidValueKind { placeholder: String, expected: &'static str, found: &'static str },
}
