//! Core types used throughout the project.

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

/// A hyperlink target, independent of the text it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub url: String,
    /// Site-relative link handled by the site router.
    pub is_internal: bool,
    pub opens_in_new_tab: bool,
}

impl LinkDescriptor {
    #[must_use]
    pub fn new(url: impl Into<String>, is_internal: bool, opens_in_new_tab: bool) -> Self {
        Self { url: url.into(), is_internal, opens_in_new_tab }
    }

    /// Link to another page of the site, opened in place.
    #[must_use]
    pub fn internal(url: impl Into<String>) -> Self {
        Self::new(url, true, false)
    }

    /// Link to another site, opened in a new tab.
    #[must_use]
    pub fn external(url: impl Into<String>) -> Self {
        Self::new(url, false, true)
    }

    /// Anchor `target` attribute.
    #[must_use]
    pub const fn target(&self) -> Option<&'static str> {
        if self.opens_in_new_tab { Some("_blank") } else { None }
    }

    /// Anchor `rel` attribute.
    ///
    /// Only external links opened in a new tab drop the referrer.
    #[must_use]
    pub const fn rel(&self) -> Option<&'static str> {
        if self.opens_in_new_tab && !self.is_internal { Some("noreferrer") } else { None }
    }
}

/// Text decoration applied to the content of a rich-text tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Decoration {
    Italic,
}

/// A value bound to a placeholder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum InterpolationValue {
    /// Substituted for `{name}`.
    Text(String),
    /// Wraps the content of `<name>...</name>` in a hyperlink.
    Link(LinkDescriptor),
    /// Wraps the content of `<name>...</name>` in a decoration.
    Decoration(Decoration),
}

impl InterpolationValue {
    /// Short human name of the value kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Link(_) => "link",
            Self::Decoration(_) => "decoration",
        }
    }
}

impl From<LinkDescriptor> for InterpolationValue {
    fn from(link: LinkDescriptor) -> Self {
        Self::Link(link)
    }
}

impl From<Decoration> for InterpolationValue {
    fn from(decoration: Decoration) -> Self {
        Self::Decoration(decoration)
    }
}

impl From<&str> for InterpolationValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Placeholder name to value mapping of a single message.
pub type Values = BTreeMap<String, InterpolationValue>;
