use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::manifest::links::SurveyLinks;

/// Environment variable holding the CDN base URL for downloadable files.
pub const CDN_BASE_URL_ENV: &str = "CDN_TILES_BASE_URL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "translationFiles.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Configuration file {path} is not valid JSON: {message}")]
    SyntaxError { path: String, message: String },
}

/// バリデーションエラーを1行ずつの文字列にまとめる
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Severity assigned to a class of diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Off,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutCopySettings {
    /// Base URL of the CDN serving downloadable files.
    /// Overridden by the `CDN_TILES_BASE_URL` environment variable.
    pub cdn_base_url: Option<String>,

    /// Locale of the default messages.
    pub default_locale: String,

    /// Separator used to flatten nested translation files.
    pub key_separator: String,

    pub translation_files: TranslationFilesConfig,

    /// Locales in which every message must be translated.
    pub required_locales: Vec<String>,

    pub survey_links: SurveyLinksConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/{locales,messages}/**/*.json".to_string()],
            exclude_patterns: vec!["**/node_modules/**".to_string()],
        }
    }
}

/// Survey forms linked from the "How you can help" list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyLinksConfig {
    pub site_satisfaction: SurveyLinks,
    pub data: SurveyLinks,
    pub contact: SurveyLinks,
}

impl Default for SurveyLinksConfig {
    fn default() -> Self {
        Self {
            site_satisfaction: SurveyLinks::site_satisfaction(),
            data: SurveyLinks::data(),
            contact: SurveyLinks::contact(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnosticsConfig {
    /// Severity of a message missing from a required locale.
    pub missing_translation: Severity,
    /// Severity of a translation key that matches no declared message.
    pub unknown_translation_key: Severity,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { missing_translation: Severity::Warning, unknown_translation_key: Severity::Warning }
    }
}

impl AboutCopySettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    ///
    /// A malformed `cdnBaseUrl` is accepted here and reported by
    /// [`crate::diagnostics::validate`].
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_locale.is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The locale cannot be empty. Example: \"en\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.translation_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/locales/*.json\"]",
            ));
        }

        for (index, pattern) in self.translation_files.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("translationFiles.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.translation_files.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("translationFiles.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, locale) in self.required_locales.iter().enumerate() {
            if locale.is_empty() {
                errors.push(ValidationError::new(
                    format!("requiredLocales[{index}]"),
                    "The locale cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for AboutCopySettings {
    fn default() -> Self {
        Self {
            cdn_base_url: None,
            default_locale: "en".to_string(),
            key_separator: ".".to_string(),
            translation_files: TranslationFilesConfig::default(),
            required_locales: Vec::new(),
            survey_links: SurveyLinksConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = AboutCopySettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"cdnBaseUrl": "https://cdn.example.org", "requiredLocales": ["es"]}"#;

        let settings: AboutCopySettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.default_locale, eq("en"));
        assert_that!(settings.cdn_base_url, some(eq("https://cdn.example.org")));
        assert_that!(settings.required_locales, elements_are![eq("es")]);
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: AboutCopySettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.cdn_base_url, none());
        assert_that!(
            settings.translation_files.include_patterns,
            elements_are![eq("**/{locales,messages}/**/*.json")]
        );
        assert_that!(settings.translation_files.exclude_patterns, elements_are![eq("**/node_modules/**")]);
        assert_that!(settings.diagnostics.missing_translation, eq(Severity::Warning));
        assert_that!(settings.survey_links, eq(&SurveyLinksConfig::default()));
    }

    #[rstest]
    fn deserialize_diagnostics_severity() {
        let json = r#"{"diagnostics": {"missingTranslation": "error", "unknownTranslationKey": "off"}}"#;

        let settings: AboutCopySettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.diagnostics.missing_translation, eq(Severity::Error));
        assert_that!(settings.diagnostics.unknown_translation_key, eq(Severity::Off));
    }

    #[rstest]
    #[case::no_scheme("cdn.example.org")]
    #[case::ftp("ftp://cdn.example.org")]
    #[case::scheme_only("https://")]
    fn validate_accepts_malformed_cdn_base_url(#[case] url: &str) {
        let settings =
            AboutCopySettings { cdn_base_url: Some(url.to_string()), ..AboutCopySettings::default() };

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn validate_invalid_key_separator_empty() {
        let settings =
            AboutCopySettings { key_separator: String::new(), ..AboutCopySettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keySeparator")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_include_patterns_empty() {
        let settings = AboutCopySettings {
            translation_files: TranslationFilesConfig {
                include_patterns: vec![],
                ..TranslationFilesConfig::default()
            },
            ..AboutCopySettings::default()
        };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.includePatterns")),
                field!(ValidationError.message, contains_substring("At least one pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = AboutCopySettings {
            translation_files: TranslationFilesConfig {
                exclude_patterns: vec!["node_modules/**".to_string(), "invalid[pattern".to_string()],
                ..TranslationFilesConfig::default()
            },
            ..AboutCopySettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.excludePatterns[1]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = AboutCopySettings {
            default_locale: String::new(),
            required_locales: vec!["es".to_string(), String::new()],
            ..AboutCopySettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. defaultLocale"));
        assert_that!(error_message, contains_substring("2. requiredLocales[1]"));
    }
}
