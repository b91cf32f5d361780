//! Locale-aware message rendering.

use thiserror::Error;

use crate::indexer::TranslationStore;
use crate::manifest::Manifest;
use crate::template::{
    RenderError,
    Rendered,
    Template,
    TemplateError,
    render,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizeError {
    #[error("Unknown message '{0}'")]
    UnknownMessage(String),

    #[error("Message '{id}' ({locale}) has an invalid template: {source}")]
    Template {
        id: String,
        locale: String,
        #[source]
        source: TemplateError,
    },

    #[error("Message '{id}' ({locale}) could not be rendered: {source}")]
    Render {
        id: String,
        locale: String,
        #[source]
        source: RenderError,
    },
}

/// Where a resolved template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource<'a> {
    /// A translation file of the given locale
    Translation { locale: &'a str },
    /// The declared default message
    Default,
}

/// Resolves message templates for a locale and renders them.
///
/// Lookup order: the requested locale, its base language (`es-MX` → `es`),
/// then the default message.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    manifest: &'a Manifest,
    translations: &'a TranslationStore,
    default_locale: &'a str,
}

impl<'a> Localizer<'a> {
    #[must_use]
    pub const fn new(
        manifest: &'a Manifest,
        translations: &'a TranslationStore,
        default_locale: &'a str,
    ) -> Self {
        Self { manifest, translations, default_locale }
    }

    #[must_use]
    pub const fn default_locale(&self) -> &'a str {
        self.default_locale
    }

    /// Template source text for a message in a locale.
    ///
    /// # Errors
    /// [`LocalizeError::UnknownMessage`] if the id is not declared.
    pub fn template_for<'l>(
        &self,
        locale: &'l str,
        id: &str,
    ) -> Result<(&'a str, TemplateSource<'l>), LocalizeError>
    where
        'a: 'l,
    {
        let entry =
            self.manifest.get(id).ok_or_else(|| LocalizeError::UnknownMessage(id.to_string()))?;

        if locale != self.default_locale {
            for candidate in fallback_chain(locale) {
                if let Some(translated) = self.translations.get(candidate, id) {
                    return Ok((
                        translated.template.as_str(),
                        TemplateSource::Translation { locale: candidate },
                    ));
                }
            }
            tracing::debug!(id, locale, "No translation found, using default message");
        }

        Ok((entry.default_message.as_str(), TemplateSource::Default))
    }

    /// Renders a message in a locale with the message's declared values.
    ///
    /// # Errors
    /// - [`LocalizeError::UnknownMessage`] if the id is not declared
    /// - [`LocalizeError::Template`] if the resolved template is malformed
    /// - [`LocalizeError::Render`] if a placeholder has no usable value
    pub fn render(&self, locale: &str, id: &str) -> Result<Rendered, LocalizeError> {
        let (source, origin) = self.template_for(locale, id)?;
        let resolved_locale = match origin {
            TemplateSource::Translation { locale } => locale,
            TemplateSource::Default => self.default_locale,
        };

        let template = Template::parse(source).map_err(|source| LocalizeError::Template {
            id: id.to_string(),
            locale: resolved_locale.to_string(),
            source,
        })?;

        let values = self
            .manifest
            .get(id)
            .map(|entry| &entry.values)
            .ok_or_else(|| LocalizeError::UnknownMessage(id.to_string()))?;

        render(&template, values).map_err(|source| LocalizeError::Render {
            id: id.to_string(),
            locale: resolved_locale.to_string(),
            source,
        })
    }
}

/// `es-MX` → `[es-MX, es]`; `es` → `[es]`.
pub(crate) fn fallback_chain(locale: &str) -> Vec<&str> {
    let mut chain = vec![locale];
    if let Some((base, _)) = locale.split_once(['-', '_'])
        && !base.is_empty()
    {
        chain.push(base);
    }
    chain
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::config::SiteConfig;
    use crate::test_utils::create_translation;

    fn fixtures() -> (Manifest, TranslationStore) {
        let manifest = Manifest::about(&SiteConfig::default()).unwrap();
        let mut store = TranslationStore::new();
        store.insert(create_translation(
            "es",
            "locales/es.json",
            &[
                ("about.page.title.text", "Acerca de"),
                ("about.page.how.you.can.help.list.item.2", "Sugiera nuevas <link1es>fuentes de datos</link1es>."),
                ("about.page.paragraph.2", "La versión actual es {version}."),
            ],
        ));
        store.insert(create_translation(
            "es-MX",
            "locales/es-MX.json",
            &[("about.page.title.text", "Acerca de (MX)")],
        ));
        (manifest, store)
    }

    #[rstest]
    #[case::exact_locale("es", "Acerca de", Some("es"))]
    #[case::regional_locale("es-MX", "Acerca de (MX)", Some("es-MX"))]
    #[case::default_locale("en", "About", None)]
    #[case::untranslated_locale("fr", "About", None)]
    fn test_template_for_fallback(
        #[case] locale: &str,
        #[case] expected: &str,
        #[case] expected_locale: Option<&str>,
    ) {
        let (manifest, store) = fixtures();
        let localizer = Localizer::new(&manifest, &store, "en");

        let (template, origin) = localizer.template_for(locale, "about.page.title.text").unwrap();

        assert_eq!(template, expected);
        match (origin, expected_locale) {
            (TemplateSource::Translation { locale }, Some(expected)) => assert_eq!(locale, expected),
            (TemplateSource::Default, None) => {}
            (origin, expected) => panic!("unexpected origin {origin:?} for {expected:?}"),
        }
    }

    #[googletest::test]
    fn test_regional_locale_falls_back_to_base_language() {
        let (manifest, store) = fixtures();
        let localizer = Localizer::new(&manifest, &store, "en");

        let rendered = localizer.render("es-MX", "about.page.paragraph.2").unwrap();

        expect_that!(rendered.to_plain_text(), eq("La versión actual es 2.0."));
    }

    #[googletest::test]
    fn test_translation_uses_locale_specific_link() {
        let (manifest, store) = fixtures();
        let localizer = Localizer::new(&manifest, &store, "en");

        let english = localizer.render("en", "about.page.how.you.can.help.list.item.2").unwrap();
        let spanish = localizer.render("es", "about.page.how.you.can.help.list.item.2").unwrap();

        let surveys = SiteConfig::default().survey_links().data.clone();
        expect_that!(english.links().first().map(|l| l.url.as_str()), some(eq(surveys.en.as_str())));
        expect_that!(spanish.links().first().map(|l| l.url.as_str()), some(eq(surveys.es.as_str())));
        expect_that!(spanish.to_plain_text(), eq("Sugiera nuevas fuentes de datos."));
    }

    #[googletest::test]
    fn test_unknown_message() {
        let (manifest, store) = fixtures();
        let localizer = Localizer::new(&manifest, &store, "en");

        expect_that!(
            localizer.render("en", "about.page.missing"),
            err(eq(&LocalizeError::UnknownMessage("about.page.missing".to_string())))
        );
    }

    #[googletest::test]
    fn test_translation_with_missing_value_fails_explicitly() {
        let manifest = Manifest::about(&SiteConfig::default()).unwrap();
        let mut store = TranslationStore::new();
        store.insert(create_translation(
            "es",
            "locales/es.json",
            &[("about.page.title.text", "Acerca de <link9>aquí</link9>")],
        ));
        let localizer = Localizer::new(&manifest, &store, "en");

        expect_that!(
            localizer.render("es", "about.page.title.text"),
            err(eq(&LocalizeError::Render {
                id: "about.page.title.text".to_string(),
                locale: "es".to_string(),
                source: RenderError::MissingInterpolationValue { placeholder: "link9".to_string() },
            }))
        );
    }

    #[rstest]
    #[case("es", vec!["es"])]
    #[case("es-MX", vec!["es-MX", "es"])]
    #[case("zh_Hant", vec!["zh_Hant", "zh"])]
    fn test_fallback_chain(#[case] locale: &str, #[case] expected: Vec<&str>) {
        assert_eq!(fallback_chain(locale), expected);
    }
}
