//! Message descriptors.

use serde::{
    Deserialize,
    Serialize,
};

use crate::template::{
    Template,
    TemplateError,
};
use crate::types::{
    InterpolationValue,
    Values,
};

/// A single message: identifier, default English template, translator note
/// and the values its placeholders are filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDescriptor {
    pub id: String,
    pub default_message: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Values::is_empty")]
    pub values: Values,
}

impl MessageDescriptor {
    /// Creates a descriptor with no values.
    ///
    /// The default message is whitespace-normalized: runs of whitespace
    /// (including newlines and indentation) become one space, and the ends
    /// are trimmed.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        default_message: &str,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            default_message: normalize_whitespace(default_message),
            description: description.into(),
            values: Values::new(),
        }
    }

    /// Binds a value to a placeholder name.
    #[must_use]
    pub fn with_value(mut self, name: &str, value: impl Into<InterpolationValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Parses the default message.
    ///
    /// # Errors
    /// Returns [`TemplateError`] if the default message is malformed.
    pub fn template(&self) -> Result<Template, TemplateError> {
        Template::parse(&self.default_message)
    }
}

/// Collapses whitespace runs to a single space and trims.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
