//! about-copy
//!
//! スクリーニングツールのウェブサイト「About」ページの文言を、型付きの
//! メッセージマニフェストとして提供する。

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod indexer;
pub mod input;
pub mod localizer;
pub mod manifest;
pub mod template;
pub mod types;

/// テスト用ユーティリティ
mod test_utils;

pub use config::SiteConfig;
pub use error::ContentError;
pub use localizer::Localizer;
pub use manifest::{
    Manifest,
    MessageDescriptor,
    VERSION_NUMBER,
};
