//! Content authoring defects.

use thiserror::Error;

use crate::template::TemplateError;

/// Defects in the declared copy or its translations.
///
/// None of these are recovered from at runtime; they are reported by
/// validation (or while building the manifest) before the copy is deployed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Message '{id}' ({locale}) references '{placeholder}' but no value is supplied")]
    MissingInterpolationValue { id: String, locale: String, placeholder: String },

    #[error(
        "Message '{id}' ({locale}): placeholder '{placeholder}' expects a {expected} value, got {found}"
    )]
    InvalidValueKind {
        id: String,
        locale: String,
        placeholder: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("'{name}' is derived from {env_var}, which is not set")]
    UnresolvedBaseUrl { name: String, env_var: &'static str },

    #[error("Base URL '{url}' (from cdnBaseUrl or {env_var}) is not an absolute http(s) URL")]
    MalformedBaseUrl { url: String, env_var: &'static str },

    #[error("Message identifier '{id}' is declared more than once")]
    DuplicateMessageIdentifier { id: String },

    #[error("Message '{id}' ({locale}) has an invalid template: {source}")]
    InvalidTemplate {
        id: String,
        locale: String,
        #[source]
        source: TemplateError,
    },

    #[error("Message '{id}' has no translation for required locale '{locale}'")]
    MissingTranslation { id: String, locale: String },

    #[error("Translation key '{key}' in {file_path} is not a declared message")]
    UnknownTranslationKey { key: String, file_path: String },
}
