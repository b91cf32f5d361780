//! The About page content manifest.

/// About page copy
mod about;
/// Message descriptors
mod entry;
/// External references and derived download links
pub mod links;

use std::collections::{
    BTreeMap,
    HashMap,
};

pub use about::VERSION_NUMBER;
pub use entry::{
    MessageDescriptor,
    normalize_whitespace,
};
use links::DownloadLinks;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::error::ContentError;

/// Immutable set of messages, built once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<MessageDescriptor>,
    index: HashMap<String, usize>,
    sections: Vec<Section>,
    download_links: DownloadLinks,
}

/// A named group of messages, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    /// Section name, e.g. `how_you_can_help`
    name: &'static str,
    /// Indexes into `Manifest::entries`
    entries: Vec<usize>,
}

/// Catalog entry written for the translation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMessage<'a> {
    pub default_message: &'a str,
    pub description: &'a str,
}

impl Manifest {
    /// Builds the About page manifest.
    ///
    /// # Errors
    /// [`ContentError::DuplicateMessageIdentifier`] if two entries share an id.
    pub fn about(config: &SiteConfig) -> Result<Self, ContentError> {
        let mut builder = ManifestBuilder::new(DownloadLinks::new(config.cdn_base_url()));
        about::declare(&mut builder, config)?;
        let manifest = builder.build();
        tracing::debug!(
            entries = manifest.len(),
            sections = manifest.sections.len(),
            "Built about page manifest"
        );
        Ok(manifest)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MessageDescriptor> {
        self.index.get(id).and_then(|&i| self.entries.get(i))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MessageDescriptor> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of a section, or `None` for an unknown section.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<Vec<&MessageDescriptor>> {
        self.sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| section.entries.iter().filter_map(|&i| self.entries.get(i)).collect())
    }

    /// Section names in declaration order.
    #[must_use]
    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.name).collect()
    }

    #[must_use]
    pub const fn download_links(&self) -> &DownloadLinks {
        &self.download_links
    }

    /// Default-locale catalog keyed by message id.
    #[must_use]
    pub fn extract(&self) -> BTreeMap<&str, ExtractedMessage<'_>> {
        self.entries
            .iter()
            .map(|entry| {
                (
                    entry.id.as_str(),
                    ExtractedMessage {
                        default_message: &entry.default_message,
                        description: &entry.description,
                    },
                )
            })
            .collect()
    }
}

/// Accumulates entries and rejects duplicate identifiers.
#[derive(Debug)]
pub struct ManifestBuilder {
    /// Entries declared so far
    entries: Vec<MessageDescriptor>,
    /// Id to entry index
    index: HashMap<String, usize>,
    /// Sections declared so far; the last one receives new entries
    sections: Vec<Section>,
    /// Derived download links
    download_links: DownloadLinks,
}

impl ManifestBuilder {
    #[must_use]
    pub fn new(download_links: DownloadLinks) -> Self {
        Self { entries: Vec::new(), index: HashMap::new(), sections: Vec::new(), download_links }
    }

    /// Starts a new section; subsequent entries belong to it.
    pub fn section(&mut self, name: &'static str) -> &mut Self {
        self.sections.push(Section { name, entries: Vec::new() });
        self
    }

    /// Adds an entry to the current section.
    ///
    /// # Errors
    /// [`ContentError::DuplicateMessageIdentifier`] if the id is already declared.
    pub fn insert(&mut self, entry: MessageDescriptor) -> Result<&mut Self, ContentError> {
        if self.index.contains_key(&entry.id) {
            return Err(ContentError::DuplicateMessageIdentifier { id: entry.id });
        }

        let position = self.entries.len();
        self.index.insert(entry.id.clone(), position);
        self.entries.push(entry);
        if let Some(section) = self.sections.last_mut() {
            section.entries.push(position);
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Manifest {
        Manifest {
            entries: self.entries,
            index: self.index,
            sections: self.sections,
            download_links: self.download_links,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn builder() -> ManifestBuilder {
        ManifestBuilder::new(DownloadLinks::new(None))
    }

    #[googletest::test]
    fn test_insert_rejects_duplicate_id() {
        let mut builder = builder();
        builder.section("page");
        builder.insert(MessageDescriptor::new("about.page.title.text", "About", "title")).unwrap();

        let result =
            builder.insert(MessageDescriptor::new("about.page.title.text", "About us", "again"));

        expect_that!(
            result.map(|_| ()),
            err(eq(&ContentError::DuplicateMessageIdentifier {
                id: "about.page.title.text".to_string()
            }))
        );
    }

    #[googletest::test]
    fn test_sections_keep_declaration_order() {
        let mut builder = builder();
        builder.section("first");
        builder.insert(MessageDescriptor::new("a", "A", "")).unwrap();
        builder.insert(MessageDescriptor::new("b", "B", "")).unwrap();
        builder.section("second");
        builder.insert(MessageDescriptor::new("c", "C", "")).unwrap();
        let manifest = builder.build();

        let first: Vec<_> =
            manifest.section("first").unwrap().iter().map(|e| e.id.as_str()).collect();
        expect_that!(first, elements_are![eq(&"a"), eq(&"b")]);
        expect_that!(manifest.section_names(), elements_are![eq(&"first"), eq(&"second")]);
        expect_that!(manifest.section("missing"), none());
        expect_that!(manifest.get("c").map(|e| e.default_message.as_str()), some(eq("C")));
    }

    #[googletest::test]
    fn test_extract_is_keyed_by_id() {
        let mut builder = builder();
        builder.insert(MessageDescriptor::new("b.id", "B", "second")).unwrap();
        builder.insert(MessageDescriptor::new("a.id", "A", "first")).unwrap();
        let manifest = builder.build();

        let json = serde_json::to_value(manifest.extract()).unwrap();

        expect_that!(json["a.id"]["defaultMessage"].as_str(), some(eq("A")));
        expect_that!(json["b.id"]["description"].as_str(), some(eq("second")));
    }
}
