//! Message templates: literal text, `{name}` slots and `<name>...</name>` tags.

/// Template parse/render errors
mod error;
/// Template source parser
mod parser;
/// Template renderer
mod render;

use std::collections::BTreeSet;

pub use error::{
    RenderError,
    TemplateError,
};
pub use render::{
    Node,
    Rendered,
    render,
};

/// A single token of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    /// `{name}`
    Slot(String),
    /// `<name>children</name>`
    Tag { name: String, children: Vec<Token> },
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Parses template source.
    ///
    /// # Errors
    /// Returns [`TemplateError`] on malformed placeholders or unbalanced tags.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        parser::parse(source).map(|tokens| Self { tokens })
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Names of every slot and tag referenced, at any depth.
    #[must_use]
    pub fn placeholders(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        collect_placeholders(&self.tokens, &mut names);
        names
    }
}

/// Depth-first walk collecting slot and tag names.
fn collect_placeholders<'a>(tokens: &'a [Token], names: &mut BTreeSet<&'a str>) {
    for token in tokens {
        match token {
            Token::Literal(_) => {}
            Token::Slot(name) => {
                names.insert(name);
            }
            Token::Tag { name, children } => {
                names.insert(name);
                collect_placeholders(children, names);
            }
        }
    }
}
