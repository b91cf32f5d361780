//! Indexer type definitions.

use std::collections::{
    BTreeMap,
    HashMap,
};

use thiserror::Error;

use crate::config::MatcherError;
use crate::input::translation::Translation;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    /// The workspace root does not exist or is not a directory
    #[error("Workspace root is not a directory: {0}")]
    InvalidPath(String),
}

/// A translated template and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedTemplate {
    pub template: String,
    pub file_path: String,
}

/// Translated templates keyed by locale, then message id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    locales: BTreeMap<String, HashMap<String, TranslatedTemplate>>,
}

impl TranslationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a loaded file into the store.
    ///
    /// A key already present for the same locale is overwritten.
    pub fn insert(&mut self, translation: Translation) {
        let entries = self.locales.entry(translation.locale).or_default();
        for (id, template) in translation.keys {
            let file_path = translation.file_path.clone();
            if let Some(previous) =
                entries.insert(id.clone(), TranslatedTemplate { template, file_path })
            {
                tracing::warn!(
                    key = %id,
                    previous = %previous.file_path,
                    current = %translation.file_path,
                    "Translation key defined in more than one file"
                );
            }
        }
    }

    #[must_use]
    pub fn get(&self, locale: &str, id: &str) -> Option<&TranslatedTemplate> {
        self.locales.get(locale).and_then(|entries| entries.get(id))
    }

    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locales in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// `(id, template)` pairs of a locale, sorted by id.
    #[must_use]
    pub fn entries(&self, locale: &str) -> Vec<(&str, &TranslatedTemplate)> {
        let mut entries: Vec<_> = self
            .locales
            .get(locale)
            .into_iter()
            .flatten()
            .map(|(id, template)| (id.as_str(), template))
            .collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
