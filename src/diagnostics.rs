//! Content validation.
//!
//! Checks the declared messages, and any loaded translations, against the
//! values each message supplies, and reports defects with a severity.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::{
    AboutCopySettings,
    Severity,
};
use crate::error::ContentError;
use crate::indexer::TranslationStore;
use crate::localizer::fallback_chain;
use crate::manifest::Manifest;
use crate::template::{
    Template,
    Token,
};
use crate::types::{
    InterpolationValue,
    Values,
};

/// A content defect and how seriously to take it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub error: ContentError,
}

impl Diagnostic {
    #[must_use]
    pub const fn error(error: ContentError) -> Self {
        Self { severity: Severity::Error, error }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Off => "off",
        };
        write!(f, "{label}: {}", self.error)
    }
}

/// Validates the manifest and translations.
///
/// Missing or mistyped values, malformed templates, and an unset or malformed
/// CDN base URL are always errors; missing translations and unknown translation
/// keys use the configured severities, and are skipped when `off`.
#[must_use]
pub fn validate(
    manifest: &Manifest,
    translations: &TranslationStore,
    settings: &AboutCopySettings,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let default_locale = settings.default_locale.as_str();

    for entry in manifest.iter() {
        check_source(&entry.id, default_locale, &entry.default_message, &entry.values, &mut diagnostics);
    }

    for locale in translations.locales() {
        for (key, translated) in translations.entries(locale) {
            let Some(entry) = manifest.get(key) else {
                push_with_severity(
                    &mut diagnostics,
                    settings.diagnostics.unknown_translation_key,
                    ContentError::UnknownTranslationKey {
                        key: key.to_string(),
                        file_path: translated.file_path.clone(),
                    },
                );
                continue;
            };
            check_source(key, locale, &translated.template, &entry.values, &mut diagnostics);
        }
    }

    for locale in &settings.required_locales {
        if locale == default_locale {
            continue;
        }
        for entry in manifest.iter() {
            let translated =
                fallback_chain(locale).into_iter().any(|c| translations.get(c, &entry.id).is_some());
            if !translated {
                push_with_severity(
                    &mut diagnostics,
                    settings.diagnostics.missing_translation,
                    ContentError::MissingTranslation { id: entry.id.clone(), locale: locale.clone() },
                );
            }
        }
    }

    let download_links = manifest.download_links();
    if let Err(error) = download_links.check_base_url() {
        diagnostics.push(Diagnostic::error(error));
    }
    for url in download_links.all() {
        if let Err(error) = url.href() {
            diagnostics.push(Diagnostic::error(error));
        }
    }

    tracing::debug!(count = diagnostics.len(), "Validation finished");
    diagnostics
}

/// Pushes unless the severity is `off`.
fn push_with_severity(diagnostics: &mut Vec<Diagnostic>, severity: Severity, error: ContentError) {
    if severity != Severity::Off {
        diagnostics.push(Diagnostic { severity, error });
    }
}

/// Parses one template source and checks it against the message's values.
fn check_source(
    id: &str,
    locale: &str,
    source: &str,
    values: &Values,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match Template::parse(source) {
        Ok(template) => {
            let mut reported = BTreeSet::new();
            check_tokens(id, locale, template.tokens(), values, &mut reported, diagnostics);
        }
        Err(source) => diagnostics.push(Diagnostic::error(ContentError::InvalidTemplate {
            id: id.to_string(),
            locale: locale.to_string(),
            source,
        })),
    }
}

/// Reports each placeholder of `tokens` whose value is missing or of the wrong kind.
///
/// `reported` keeps a placeholder from being reported twice in one template.
fn check_tokens<'t>(
    id: &str,
    locale: &str,
    tokens: &'t [Token],
    values: &Values,
    reported: &mut BTreeSet<&'t str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for token in tokens {
        let (name, is_tag) = match token {
            Token::Literal(_) => continue,
            Token::Slot(name) => (name.as_str(), false),
            Token::Tag { name, children } => {
                check_tokens(id, locale, children, values, reported, diagnostics);
                (name.as_str(), true)
            }
        };
        if !reported.insert(name) {
            continue;
        }

        let error = match (values.get(name), is_tag) {
            (None, _) => ContentError::MissingInterpolationValue {
                id: id.to_string(),
                locale: locale.to_string(),
                placeholder: name.to_string(),
            },
            (Some(InterpolationValue::Text(_)), false)
            | (Some(InterpolationValue::Link(_) | InterpolationValue::Decoration(_)), true) => {
                continue;
            }
            (Some(value), is_tag) => ContentError::InvalidValueKind {
                id: id.to_string(),
                locale: locale.to_string(),
                placeholder: name.to_string(),
                expected: if is_tag { "link or decoration" } else { "text" },
                found: value.kind(),
            },
        };
        diagnostics.push(Diagnostic::error(error));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::config::SiteConfig;
    use crate::manifest::links::DownloadLinks;
    use crate::manifest::{
        ManifestBuilder,
        MessageDescriptor,
    };
    use crate::template::TemplateError;
    use crate::test_utils::create_translation;
    use crate::types::LinkDescriptor;

    fn resolved_manifest(entries: Vec<MessageDescriptor>) -> Manifest {
        let mut builder = ManifestBuilder::new(DownloadLinks::new(Some("https://cdn.example.org")));
        for entry in entries {
            builder.insert(entry).unwrap();
        }
        builder.build()
    }

    #[googletest::test]
    fn test_about_manifest_is_clean_when_base_url_set() {
        let manifest = Manifest::about(&SiteConfig::with_cdn_base_url("https://cdn.example.org")).unwrap();

        let diagnostics = validate(&manifest, &TranslationStore::new(), &AboutCopySettings::default());

        expect_that!(diagnostics, is_empty());
    }

    #[googletest::test]
    fn test_unset_base_url_reports_each_derived_link() {
        let manifest = Manifest::about(&SiteConfig::default()).unwrap();

        let diagnostics = validate(&manifest, &TranslationStore::new(), &AboutCopySettings::default());

        expect_that!(diagnostics.len(), eq(3));
        for diagnostic in &diagnostics {
            expect_that!(diagnostic.is_error(), eq(true));
            assert!(matches!(
                &diagnostic.error,
                ContentError::UnresolvedBaseUrl { env_var, .. } if *env_var == "CDN_TILES_BASE_URL"
            ));
        }
    }

    #[googletest::test]
    fn test_malformed_base_url_reported_once() {
        let manifest = Manifest::about(&SiteConfig::with_cdn_base_url("cdn.example.org")).unwrap();

        let diagnostics = validate(&manifest, &TranslationStore::new(), &AboutCopySettings::default());

        expect_that!(
            diagnostics,
            elements_are![eq(&Diagnostic::error(ContentError::MalformedBaseUrl {
                url: "cdn.example.org".to_string(),
                env_var: "CDN_TILES_BASE_URL",
            }))]
        );
    }

    #[googletest::test]
    fn test_missing_value_reported_once_per_placeholder() {
        let manifest = resolved_manifest(vec![MessageDescriptor::new(
            "a",
            "{version} and again {version}, see <link1>here</link1>",
            "",
        )
        .with_value("link1", LinkDescriptor::internal("/methodology"))]);

        let diagnostics = validate(&manifest, &TranslationStore::new(), &AboutCopySettings::default());

        expect_that!(
            diagnostics,
            elements_are![eq(&Diagnostic::error(ContentError::MissingInterpolationValue {
                id: "a".to_string(),
                locale: "en".to_string(),
                placeholder: "version".to_string(),
            }))]
        );
    }

    #[googletest::test]
    fn test_value_kind_mismatch_reported() {
        let manifest = resolved_manifest(vec![
            MessageDescriptor::new("a", "<link1>x</link1>", "").with_value("link1", "/methodology"),
        ]);

        let diagnostics = validate(&manifest, &TranslationStore::new(), &AboutCopySettings::default());

        expect_that!(
            diagnostics,
            elements_are![eq(&Diagnostic::error(ContentError::InvalidValueKind {
                id: "a".to_string(),
                locale: "en".to_string(),
                placeholder: "link1".to_string(),
                expected: "link or decoration",
                found: "text",
            }))]
        );
    }

    #[googletest::test]
    fn test_translation_checked_against_entry_values() {
        let manifest = resolved_manifest(vec![
            MessageDescriptor::new("a", "<link1>data</link1>", "")
                .with_value("link1", LinkDescriptor::external("https://en.example.org"))
                .with_value("link1es", LinkDescriptor::external("https://es.example.org")),
        ]);
        let mut store = TranslationStore::new();
        store.insert(create_translation("es", "locales/es.json", &[("a", "<link1es>datos</link1es>")]));
        store.insert(create_translation("fr", "locales/fr.json", &[("a", "<link1fr>données</link1fr>")]));

        let diagnostics = validate(&manifest, &store, &AboutCopySettings::default());

        expect_that!(
            diagnostics,
            elements_are![eq(&Diagnostic::error(ContentError::MissingInterpolationValue {
                id: "a".to_string(),
                locale: "fr".to_string(),
                placeholder: "link1fr".to_string(),
            }))]
        );
    }

    #[googletest::test]
    fn test_invalid_translation_template_reported() {
        let manifest = resolved_manifest(vec![MessageDescriptor::new("a", "A", "")]);
        let mut store = TranslationStore::new();
        store.insert(create_translation("es", "locales/es.json", &[("a", "<b>sin cerrar")]));

        let diagnostics = validate(&manifest, &store, &AboutCopySettings::default());

        expect_that!(
            diagnostics,
            elements_are![eq(&Diagnostic::error(ContentError::InvalidTemplate {
                id: "a".to_string(),
                locale: "es".to_string(),
                source: TemplateError::UnclosedTag { name: "b".to_string(), offset: 0 },
            }))]
        );
    }

    #[googletest::test]
    fn test_missing_and_unknown_translations_use_configured_severity() {
        let manifest = resolved_manifest(vec![
            MessageDescriptor::new("a", "A", ""),
            MessageDescriptor::new("b", "B", ""),
        ]);
        let mut store = TranslationStore::new();
        store.insert(create_translation("es", "locales/es.json", &[("a", "A"), ("zzz", "Z")]));
        let mut settings =
            AboutCopySettings { required_locales: vec!["es-MX".to_string()], ..AboutCopySettings::default() };
        settings.diagnostics.missing_translation = Severity::Error;

        let diagnostics = validate(&manifest, &store, &settings);

        expect_that!(
            diagnostics,
            unordered_elements_are![
                eq(&Diagnostic {
                    severity: Severity::Warning,
                    error: ContentError::UnknownTranslationKey {
                        key: "zzz".to_string(),
                        file_path: "locales/es.json".to_string(),
                    },
                }),
                eq(&Diagnostic {
                    severity: Severity::Error,
                    error: ContentError::MissingTranslation {
                        id: "b".to_string(),
                        locale: "es-MX".to_string(),
                    },
                })
            ]
        );
    }

    #[googletest::test]
    fn test_off_severity_suppresses_diagnostics() {
        let manifest = resolved_manifest(vec![MessageDescriptor::new("a", "A", "")]);
        let mut store = TranslationStore::new();
        store.insert(create_translation("es", "locales/es.json", &[("zzz", "Z")]));
        let mut settings =
            AboutCopySettings { required_locales: vec!["es".to_string()], ..AboutCopySettings::default() };
        settings.diagnostics.missing_translation = Severity::Off;
        settings.diagnostics.unknown_translation_key = Severity::Off;

        expect_that!(validate(&manifest, &store, &settings), is_empty());
    }

    #[googletest::test]
    fn test_display_includes_severity() {
        let diagnostic = Diagnostic::error(ContentError::DuplicateMessageIdentifier { id: "a".to_string() });

        expect_that!(diagnostic.to_string(), eq("error: Message identifier 'a' is declared more than once"));
    }
}
