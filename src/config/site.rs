//! Frozen configuration handed to the manifest.

use super::{
    AboutCopySettings,
    SurveyLinksConfig,
};

/// Immutable site configuration, built once at startup and passed by
/// reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    /// CDN base URL; `None` when neither the settings nor the environment set it
    cdn_base_url: Option<String>,
    /// Survey forms
    survey_links: SurveyLinksConfig,
}

impl SiteConfig {
    #[must_use]
    pub const fn new(cdn_base_url: Option<String>, survey_links: SurveyLinksConfig) -> Self {
        Self { cdn_base_url, survey_links }
    }

    /// Freezes validated settings.
    #[must_use]
    pub fn from_settings(settings: &AboutCopySettings) -> Self {
        Self::new(settings.cdn_base_url.clone(), settings.survey_links.clone())
    }

    /// Default configuration with a CDN base URL.
    #[must_use]
    pub fn with_cdn_base_url(cdn_base_url: impl Into<String>) -> Self {
        Self { cdn_base_url: Some(cdn_base_url.into()), ..Self::default() }
    }

    #[must_use]
    pub fn cdn_base_url(&self) -> Option<&str> {
        self.cdn_base_url.as_deref()
    }

    #[must_use]
    pub const fn survey_links(&self) -> &SurveyLinksConfig {
        &self.survey_links
    }
}
