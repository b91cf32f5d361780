//! 設定管理を行うモジュール

use std::path::{
    Path,
    PathBuf,
};

use super::{
    AboutCopySettings,
    CDN_BASE_URL_ENV,
    ConfigError,
    SiteConfig,
    loader,
};
use crate::manifest::links::is_http_url;

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: AboutCopySettings,

    /// ワークスペースのルートパス
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: AboutCopySettings::default(), workspace_root: None }
    }

    /// 設定を読み込む
    ///
    /// 設定ファイルを読み込んだ後、環境変数 `CDN_TILES_BASE_URL` で
    /// `cdnBaseUrl` を上書きする。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        let env_base_url = std::env::var(CDN_BASE_URL_ENV).ok();
        self.load_settings_with_env(workspace_root, env_base_url)
    }

    /// 環境変数の値を明示して設定を読み込む
    ///
    /// 空文字列の環境変数は未設定として扱う。
    ///
    /// # Errors
    /// `load_settings` と同じ
    pub fn load_settings_with_env(
        &mut self,
        workspace_root: Option<PathBuf>,
        env_base_url: Option<String>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        // ワークスペースの設定を読み込み
        let mut settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(AboutCopySettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            AboutCopySettings::default()
        };

        // 環境変数で上書き
        if let Some(url) = env_base_url.filter(|url| !url.is_empty()) {
            tracing::debug!(env = CDN_BASE_URL_ENV, "CDN base URL taken from environment");
            settings.cdn_base_url = Some(url);
        }

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        match settings.cdn_base_url.as_deref() {
            None => tracing::warn!(
                env = CDN_BASE_URL_ENV,
                "No CDN base URL configured; download links will be unresolved"
            ),
            Some(url) if !is_http_url(url) => tracing::warn!(
                env = CDN_BASE_URL_ENV,
                url,
                "CDN base URL is not an absolute http(s) URL; download links will be malformed"
            ),
            Some(_) => {}
        }

        // 設定を保存
        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する
    ///
    /// # Errors
    /// バリデーションエラー
    pub fn update_settings(&mut self, new_settings: AboutCopySettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &AboutCopySettings {
        &self.current_settings
    }

    /// 現在の設定からサイト設定を生成
    #[must_use]
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig::from_settings(&self.current_settings)
    }

    /// ワークスペースルートを取得
    #[must_use]
    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }
}
