//! Validates the About page copy and writes the default-locale message
//! catalog to stdout.
//!
//! Usage: `about-copy [WORKSPACE]` (defaults to the current directory).

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use about_copy::config::{
    ConfigError,
    ConfigManager,
    Severity,
};
use about_copy::diagnostics::validate;
use about_copy::indexer::{
    IndexerError,
    WorkspaceIndexer,
};
use about_copy::{
    ContentError,
    Manifest,
};
use tracing_subscriber::EnvFilter;

/// Failures that stop the run before validation completes.
#[derive(Debug, thiserror::Error)]
enum AppError {
    /// Workspace path could not be determined
    #[error("Failed to resolve workspace: {0}")]
    Workspace(#[source] std::io::Error),
    /// Settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Manifest could not be built
    #[error(transparent)]
    Content(#[from] ContentError),
    /// Translation files could not be indexed
    #[error(transparent)]
    Indexer(#[from] IndexerError),
    /// Catalog could not be written
    #[error("Failed to write catalog: {0}")]
    Output(#[from] std::io::Error),
    /// Catalog could not be serialized
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Entry point.
fn main() -> ExitCode {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when validation reported an error.
fn run() -> Result<bool, AppError> {
    let workspace = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => std::env::current_dir().map_err(AppError::Workspace)?,
    };

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(workspace.clone()))?;
    let settings = config_manager.get_settings();

    let manifest = Manifest::about(&config_manager.site_config())?;
    let translations = WorkspaceIndexer::new(workspace, settings)?.index_workspace()?;

    let diagnostics = validate(&manifest, &translations, settings);
    for diagnostic in &diagnostics {
        match diagnostic.severity {
            Severity::Error => tracing::error!("{}", diagnostic.error),
            Severity::Warning => tracing::warn!("{}", diagnostic.error),
            Severity::Info => tracing::info!("{}", diagnostic.error),
            Severity::Off => {}
        }
    }
    let ok = !diagnostics.iter().any(|d| d.is_error());
    tracing::info!(
        messages = manifest.len(),
        locales = translations.locales().count(),
        diagnostics = diagnostics.len(),
        "Validated about page copy"
    );

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &manifest.extract())?;
    writeln!(stdout)?;

    Ok(ok)
}
