//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::input::translation::Translation;

/// テスト用の Translation を作成する
///
/// # Arguments
/// * `locale` - ロケール（例: "es", "es-MX"）
/// * `file_path` - 翻訳ファイルのパス
/// * `keys` - メッセージ ID と翻訳テンプレートの組
pub(crate) fn create_translation(
    locale: &str,
    file_path: &str,
    keys: &[(&str, &str)],
) -> Translation {
    Translation {
        locale: locale.to_string(),
        file_path: file_path.to_string(),
        keys: keys.iter().map(|(id, template)| ((*id).to_string(), (*template).to_string())).collect(),
    }
}
