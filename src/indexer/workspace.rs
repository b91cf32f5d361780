//! Workspace walker that loads translation catalogs.

use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use crate::config::{
    AboutCopySettings,
    FileMatcher,
};
use crate::indexer::types::{
    IndexerError,
    TranslationStore,
};
use crate::input::translation::load_translation_file;

/// Finds translation files under a workspace and loads them into a
/// [`TranslationStore`].
#[derive(Debug, Clone)]
pub struct WorkspaceIndexer {
    /// Translation file matcher rooted at the workspace
    matcher: FileMatcher,
    /// Separator for nested translation keys
    key_separator: String,
}

impl WorkspaceIndexer {
    /// Creates an indexer for the workspace.
    ///
    /// # Errors
    /// Returns error if a translation glob is invalid.
    pub fn new(workspace_root: PathBuf, settings: &AboutCopySettings) -> Result<Self, IndexerError> {
        let matcher = FileMatcher::new(workspace_root, settings)?;
        Ok(Self { matcher, key_separator: settings.key_separator.clone() })
    }

    /// Loads every translation file of the workspace.
    ///
    /// Files that cannot be read or parsed are logged and skipped.
    ///
    /// # Errors
    /// Returns error if the workspace root is not a directory.
    pub fn index_workspace(&self) -> Result<TranslationStore, IndexerError> {
        let workspace_path = self.matcher.workspace_root();
        if !workspace_path.is_dir() {
            return Err(IndexerError::InvalidPath(workspace_path.display().to_string()));
        }
        tracing::debug!(workspace_path = %workspace_path.display(), "Indexing translations");

        let mut store = TranslationStore::new();
        for file in self.find_translation_files() {
            match load_translation_file(&file, &self.key_separator) {
                Ok(translation) => {
                    tracing::debug!(
                        file = %file.display(),
                        locale = %translation.locale,
                        keys = translation.keys.len(),
                        "Loaded translation file"
                    );
                    store.insert(translation);
                }
                Err(e) => {
                    // 読み込みエラーは警告として扱い、処理を続行
                    tracing::warn!("Skipping translation file: {e}");
                }
            }
        }

        Ok(store)
    }

    /// Translation files under the workspace, sorted by path.
    #[must_use]
    pub fn find_translation_files(&self) -> Vec<PathBuf> {
        let workspace_path = self.matcher.workspace_root();
        let mut found_files = Vec::new();

        for result in WalkBuilder::new(workspace_path)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if self.is_translation_file(path) {
                found_files.push(path.to_path_buf());
            }
        }

        found_files.sort();
        found_files
    }

    fn is_translation_file(&self, path: &Path) -> bool {
        self.matcher.is_translation_file(path)
    }
}
