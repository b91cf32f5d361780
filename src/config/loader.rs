//! 設定ファイルの読み込み関数

use std::path::Path;

use jsonc_parser::ParseOptions;

use super::{
    AboutCopySettings,
    ConfigError,
};

/// 設定ファイル名
pub(super) const CONFIG_FILE_NAME: &str = ".about-copy.json";

/// ワークスペース直下の `.about-copy.json` を読み込む
///
/// コメントと末尾カンマを許容する (JSONC)。空のファイルはデフォルト設定として扱う。
/// 戻り値は、ファイルが無ければ `Ok(None)`。
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSONC の構文エラー
/// - 設定の型が合わない
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<AboutCopySettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        tracing::debug!(path = %config_path.display(), "No settings file");
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)?;
    let value = jsonc_parser::parse_to_serde_value(&content, &ParseOptions::default()).map_err(
        |e| ConfigError::SyntaxError {
            path: config_path.display().to_string(),
            message: e.to_string(),
        },
    )?;

    let settings = match value {
        Some(value) => serde_json::from_value(value)?,
        None => AboutCopySettings::default(),
    };
    tracing::debug!(path = %config_path.display(), "Loaded settings file");

    Ok(Some(settings))
}
