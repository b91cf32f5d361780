//! Settings loading, validation and the frozen site configuration.
/// Settings file loader
mod loader;
/// Configuration manager
mod manager;
/// Translation file pattern matcher
mod matcher;
/// Frozen configuration handed to the manifest
mod site;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use site::SiteConfig;
pub use types::{
    AboutCopySettings,
    CDN_BASE_URL_ENV,
    ConfigError,
    DiagnosticsConfig,
    Severity,
    SurveyLinksConfig,
    TranslationFilesConfig,
    ValidationError,
};
