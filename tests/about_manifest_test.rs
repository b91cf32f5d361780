//! About ページのマニフェストに関する結合テスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::collections::HashSet;

use about_copy::config::SiteConfig;
use about_copy::template::{
    Template,
    render,
};
use about_copy::types::{
    InterpolationValue,
    LinkDescriptor,
};
use about_copy::{
    Manifest,
    VERSION_NUMBER,
};
use googletest::prelude::*;
use rstest::{
    fixture,
    rstest,
};

#[fixture]
fn manifest() -> Manifest {
    Manifest::about(&SiteConfig::with_cdn_base_url("https://cdn.example.org")).unwrap()
}

#[rstest]
fn test_placeholders_are_covered_by_values(manifest: Manifest) {
    for entry in manifest.iter() {
        let template = entry.template().unwrap();
        for placeholder in template.placeholders() {
            assert!(
                entry.values.contains_key(placeholder),
                "{} references {placeholder} without a value",
                entry.id
            );
        }
    }
}

#[rstest]
fn test_message_identifiers_are_distinct(manifest: Manifest) {
    let ids: HashSet<_> = manifest.iter().map(|entry| entry.id.as_str()).collect();

    assert_eq!(ids.len(), manifest.len());
}

#[rstest]
fn test_every_default_message_renders(manifest: Manifest) {
    for entry in manifest.iter() {
        let rendered = render(&entry.template().unwrap(), &entry.values);

        assert!(rendered.is_ok(), "{} failed to render: {rendered:?}", entry.id);
    }
}

#[gtest]
#[rstest]
fn test_version_renders_identically_everywhere(manifest: Manifest) {
    let expected = format!("version {VERSION_NUMBER}");
    let version_entries: Vec<_> = manifest
        .iter()
        .filter(|entry| entry.template().unwrap().placeholders().contains("version"))
        .collect();

    assert_that!(version_entries, not(is_empty()));
    for entry in version_entries {
        expect_that!(
            entry.values.get("version"),
            some(eq(&InterpolationValue::Text(VERSION_NUMBER.to_string())))
        );
        let text = render(&entry.template().unwrap(), &entry.values).unwrap().to_plain_text();
        expect_that!(text, contains_substring(expected.as_str()));
    }
}

#[rstest]
fn test_download_link_concatenates_base_url(manifest: Manifest) {
    let links = manifest.download_links();

    assert_eq!(
        links.instructions.href().unwrap(),
        "https://cdn.example.org/data-versions/2.0/data/score/downloadable/CEQ-CEJST-Instructions.pdf"
    );
}

#[rstest]
fn test_link_flags_independent_of_text() {
    let template = Template::parse("<link1>first text</link1> / <link1>other text</link1>").unwrap();
    let link = LinkDescriptor::new("/methodology", true, false);
    let values = [("link1".to_string(), InterpolationValue::Link(link.clone()))].into_iter().collect();

    let rendered = render(&template, &values).unwrap();

    let links = rendered.links();
    assert_eq!(links.len(), 2);
    for rendered_link in links {
        assert_eq!(rendered_link, &link);
    }
    assert_ne!(LinkDescriptor::new("/methodology", true, false), LinkDescriptor::new("/methodology", false, true));
}

#[rstest]
fn test_manifest_is_deterministic() {
    let config = SiteConfig::with_cdn_base_url("https://cdn.example.org");

    let first = Manifest::about(&config).unwrap();
    let second = Manifest::about(&config).unwrap();

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a, b);
    }
}

#[rstest]
fn test_unset_base_url_does_not_fail_initialization() {
    let manifest = Manifest::about(&SiteConfig::default()).unwrap();

    let instructions = &manifest.download_links().instructions;
    assert!(instructions.href().is_err());
    assert_eq!(
        instructions.to_string_lossy(),
        "/data-versions/2.0/data/score/downloadable/CEQ-CEJST-Instructions.pdf"
    );
}
