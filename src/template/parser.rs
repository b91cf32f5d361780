//! Template source parser.
//!
//! Supports the subset of ICU message syntax the site copy uses:
//! - `{name}` simple arguments
//! - `<name>...</name>` rich-text tags, nestable
//! - `''` for a literal apostrophe, and `'` before `{`, `}` or `<` to start a
//!   quoted literal that runs to the next lone `'`
//!
//! A `<` that does not form a well-formed tag is kept as literal text.

use super::Token;
use super::error::TemplateError;

/// An open tag waiting for its closing counterpart.
#[derive(Debug)]
struct OpenTag {
    /// Tag name
    name: String,
    /// Offset of the `<`
    offset: usize,
    /// Tokens collected before the tag was opened
    outer: Vec<Token>,
}

/// Cursor over the template source.
#[derive(Debug)]
struct Parser<'a> {
    /// `(byte offset, char)` pairs of the source
    chars: Vec<(usize, char)>,
    /// Index into `chars`
    cursor: usize,
    /// Source length in bytes
    len: usize,
    /// Source text, kept for slicing tag names
    source: &'a str,
}

/// Parses template source into tokens.
pub(super) fn parse(source: &str) -> Result<Vec<Token>, TemplateError> {
    Parser::new(source).run()
}

/// Returns true if the name is usable as a slot or tag name.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

impl<'a> Parser<'a> {
    /// Creates a parser at the start of `source`.
    fn new(source: &'a str) -> Self {
        Self { chars: source.char_indices().collect(), cursor: 0, len: source.len(), source }
    }

    /// Character at `cursor + ahead`.
    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.cursor + ahead).map(|&(_, c)| c)
    }

    /// Byte offset at `cursor`.
    fn offset(&self) -> usize {
        self.chars.get(self.cursor).map_or(self.len, |&(offset, _)| offset)
    }

    /// Parses the whole source.
    fn run(mut self) -> Result<Vec<Token>, TemplateError> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut open_tags: Vec<OpenTag> = Vec::new();

        while let Some(c) = self.peek(0) {
            match c {
                '\'' => self.quoted(&mut literal)?,
                '{' => {
                    let slot = self.slot()?;
                    flush(&mut literal, &mut tokens);
                    tokens.push(slot);
                }
                '<' => {
                    let offset = self.offset();
                    match self.tag() {
                        Some(TagMarker::Open(name)) => {
                            flush(&mut literal, &mut tokens);
                            open_tags.push(OpenTag {
                                name,
                                offset,
                                outer: std::mem::take(&mut tokens),
                            });
                        }
                        Some(TagMarker::Close(found)) => {
                            flush(&mut literal, &mut tokens);
                            let Some(open) = open_tags.pop() else {
                                return Err(TemplateError::UnexpectedClosingTag {
                                    name: found,
                                    offset,
                                });
                            };
                            if open.name != found {
                                return Err(TemplateError::MismatchedClosingTag {
                                    expected: open.name,
                                    found,
                                    offset,
                                });
                            }
                            let children = std::mem::replace(&mut tokens, open.outer);
                            tokens.push(Token::Tag { name: open.name, children });
                        }
                        None => {
                            literal.push('<');
                            self.cursor += 1;
                        }
                    }
                }
                _ => {
                    literal.push(c);
                    self.cursor += 1;
                }
            }
        }

        if let Some(open) = open_tags.pop() {
            return Err(TemplateError::UnclosedTag { name: open.name, offset: open.offset });
        }

        flush(&mut literal, &mut tokens);
        Ok(tokens)
    }

    /// Handles an apostrophe at the cursor.
    fn quoted(&mut self, literal: &mut String) -> Result<(), TemplateError> {
        let start = self.offset();
        match self.peek(1) {
            Some('\'') => {
                literal.push('\'');
                self.cursor += 2;
                Ok(())
            }
            Some('{' | '}' | '<') => {
                self.cursor += 1;
                loop {
                    match (self.peek(0), self.peek(1)) {
                        (Some('\''), Some('\'')) => {
                            literal.push('\'');
                            self.cursor += 2;
                        }
                        (Some('\''), _) => {
                            self.cursor += 1;
                            return Ok(());
                        }
                        (Some(c), _) => {
                            literal.push(c);
                            self.cursor += 1;
                        }
                        (None, _) => {
                            return Err(TemplateError::UnterminatedQuote { offset: start });
                        }
                    }
                }
            }
            _ => {
                literal.push('\'');
                self.cursor += 1;
                Ok(())
            }
        }
    }

    /// Parses `{name}` at the cursor.
    fn slot(&mut self) -> Result<Token, TemplateError> {
        let start = self.offset();
        self.cursor += 1;
        let mut name = String::new();
        loop {
            match self.peek(0) {
                Some('}') => {
                    self.cursor += 1;
                    break;
                }
                Some('{') | None => return Err(TemplateError::UnclosedPlaceholder { offset: start }),
                Some(c) => {
                    name.push(c);
                    self.cursor += 1;
                }
            }
        }

        let name = name.trim();
        if !is_valid_name(name) {
            return Err(TemplateError::InvalidPlaceholderName {
                name: name.to_string(),
                offset: start,
            });
        }
        Ok(Token::Slot(name.to_string()))
    }

    /// Tries to read `<name>` or `</name>` at the cursor.
    ///
    /// Leaves the cursor untouched when the text is not a tag.
    fn tag(&mut self) -> Option<TagMarker> {
        let closing = self.peek(1) == Some('/');
        let name_start = self.cursor + if closing { 2 } else { 1 };

        let mut end = name_start;
        while let Some(&(_, c)) = self.chars.get(end) {
            if c == '>' {
                break;
            }
            end += 1;
        }
        let &(close_offset, _) = self.chars.get(end)?;
        let &(name_offset, _) = self.chars.get(name_start)?;
        let name = self.source.get(name_offset..close_offset)?;
        if !is_valid_name(name) {
            return None;
        }

        self.cursor = end + 1;
        let name = name.to_string();
        Some(if closing { TagMarker::Close(name) } else { TagMarker::Open(name) })
    }
}

/// Result of scanning a `<`.
#[derive(Debug)]
enum TagMarker {
    /// `<name>`
    Open(String),
    /// `</name>`
    Close(String),
}

/// Moves pending literal text into the token list.
fn flush(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}
