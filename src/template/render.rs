//! Template renderer.
//!
//! Produces a node tree rather than markup; anchor and decoration semantics
//! are left to the presentation layer.

use super::error::RenderError;
use super::{
    Template,
    Token,
};
use crate::types::{
    Decoration,
    InterpolationValue,
    LinkDescriptor,
    Values,
};

/// A rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Link { link: LinkDescriptor, children: Vec<Node> },
    Decorated { decoration: Decoration, children: Vec<Node> },
}

/// Output of [`render`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub nodes: Vec<Node>,
}

impl Rendered {
    /// Text content with all link and decoration wrappers removed.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        push_plain_text(&self.nodes, &mut out);
        out
    }

    /// Every link in document order.
    #[must_use]
    pub fn links(&self) -> Vec<&LinkDescriptor> {
        let mut links = Vec::new();
        collect_links(&self.nodes, &mut links);
        links
    }
}

/// Appends the text of `nodes`, dropping markup.
fn push_plain_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Link { children, .. } | Node::Decorated { children, .. } => {
                push_plain_text(children, out);
            }
        }
    }
}

/// Links in document order.
fn collect_links<'a>(nodes: &'a [Node], links: &mut Vec<&'a LinkDescriptor>) {
    for node in nodes {
        match node {
            Node::Text(_) => {}
            Node::Link { link, children } => {
                links.push(link);
                collect_links(children, links);
            }
            Node::Decorated { children, .. } => collect_links(children, links),
        }
    }
}

/// Renders a template against its values.
///
/// Slots take `Text` values; tags take `Link` or `Decoration` values.
///
/// # Errors
/// - [`RenderError::MissingInterpolationValue`] if a referenced name has no value
/// - [`RenderError::InvalidValueKind`] if the value cannot fill that placeholder
pub fn render(template: &Template, values: &Values) -> Result<Rendered, RenderError> {
    let mut nodes = Vec::new();
    render_tokens(template.tokens(), values, &mut nodes)?;
    Ok(Rendered { nodes })
}

/// Renders `tokens` into `nodes`, merging adjacent text.
fn render_tokens(
    tokens: &[Token],
    values: &Values,
    nodes: &mut Vec<Node>,
) -> Result<(), RenderError> {
    for token in tokens {
        match token {
            Token::Literal(text) => push_text(nodes, text),
            Token::Slot(name) => match lookup(values, name)? {
                InterpolationValue::Text(text) => push_text(nodes, text),
                other => {
                    return Err(RenderError::InvalidValueKind {
                        placeholder: name.clone(),
                        expected: "text",
                        found: other.kind(),
                    });
                }
            },
            Token::Tag { name, children: child_tokens } => {
                let value = lookup(values, name)?;
                let mut children = Vec::new();
                render_tokens(child_tokens, values, &mut children)?;
                match value {
                    InterpolationValue::Link(link) => {
                        nodes.push(Node::Link { link: link.clone(), children });
                    }
                    InterpolationValue::Decoration(decoration) => {
                        nodes.push(Node::Decorated { decoration: *decoration, children });
                    }
                    InterpolationValue::Text(_) => {
                        return Err(RenderError::InvalidValueKind {
                            placeholder: name.clone(),
                            expected: "link or decoration",
                            found: value.kind(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

/// Value for a placeholder.
fn lookup<'a>(values: &'a Values, name: &str) -> Result<&'a InterpolationValue, RenderError> {
    values
        .get(name)
        .ok_or_else(|| RenderError::MissingInterpolationValue { placeholder: name.to_string() })
}

/// Appends text, merging with a preceding text node.
fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}
