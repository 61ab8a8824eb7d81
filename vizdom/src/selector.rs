//! The host selector-matching primitive.
//!
//! Supports what the widget layer actually asks for: selector lists (`,`),
//! the universal selector, type selectors, `#id`, `.class`, and
//! `[attr]`/`[attr=value]` tests combined into compound selectors.
//! Combinators are rejected as syntax errors.

use std::error::Error;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::Element;

/// Invalid selector syntax, propagated unmodified from the host selector
/// engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorError {
    /// What went wrong.
    pub message: String,
    /// Byte position of the offending character in the selector string.
    pub position: usize,
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid selector at position {}: {}",
            self.position, self.message
        )
    }
}

impl Error for SelectorError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SimpleSelector {
    Universal,
    Type(String),
    Id(String),
    Class(String),
    Attribute { name: String, value: Option<String> },
}

type Compound = Vec<SimpleSelector>;

/// Test whether `element` satisfies `selector`.
pub(crate) fn matches(element: Element<'_>, selector: &str) -> Result<bool, SelectorError> {
    let compounds = parse(selector)?;
    Ok(compounds
        .iter()
        .any(|compound| compound.iter().all(|simple| simple_matches(element, simple))))
}

fn simple_matches(element: Element<'_>, simple: &SimpleSelector) -> bool {
    match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(tag) => element.tag_name().eq_ignore_ascii_case(tag),
        SimpleSelector::Id(id) => element.get_attribute("id").as_deref() == Some(id.as_str()),
        SimpleSelector::Class(class) => element.has_class(class),
        SimpleSelector::Attribute { name, value: None } => element.has_attribute(name),
        SimpleSelector::Attribute {
            name,
            value: Some(expected),
        } => element.get_attribute(name).as_deref() == Some(expected.as_str()),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(i, _)| *i)
            .unwrap_or(self.input.len())
    }

    fn error(&mut self, message: &str) -> SelectorError {
        SelectorError {
            message: message.to_owned(),
            position: self.position(),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.chars.peek(), Some((_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn ident(&mut self) -> String {
        let mut out = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if !is_ident_char(c) {
                break;
            }
            out.push(c);
            self.chars.next();
        }
        out
    }

    fn required_ident(&mut self, what: &str) -> Result<String, SelectorError> {
        let ident = self.ident();
        if ident.is_empty() {
            Err(self.error(&format!("expected {what}")))
        } else {
            Ok(ident)
        }
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let mut parts = Compound::new();
        match self.chars.peek().copied() {
            Some((_, '*')) => {
                self.chars.next();
                parts.push(SimpleSelector::Universal);
            }
            Some((_, c)) if is_ident_char(c) => {
                parts.push(SimpleSelector::Type(self.ident()));
            }
            _ => {}
        }
        loop {
            match self.chars.peek().copied() {
                Some((_, '#')) => {
                    self.chars.next();
                    parts.push(SimpleSelector::Id(self.required_ident("an id")?));
                }
                Some((_, '.')) => {
                    self.chars.next();
                    parts.push(SimpleSelector::Class(self.required_ident("a class name")?));
                }
                Some((_, '[')) => {
                    self.chars.next();
                    parts.push(self.attribute_test()?);
                }
                _ => break,
            }
        }
        if parts.is_empty() {
            return Err(self.error("expected a selector"));
        }
        Ok(parts)
    }

    fn attribute_test(&mut self) -> Result<SimpleSelector, SelectorError> {
        let name = self.required_ident("an attribute name")?;
        let value = match self.chars.peek().copied() {
            Some((_, '=')) => {
                self.chars.next();
                Some(self.attribute_value()?)
            }
            _ => None,
        };
        match self.chars.next() {
            Some((_, ']')) => Ok(SimpleSelector::Attribute { name, value }),
            _ => Err(self.error("expected ']'")),
        }
    }

    fn attribute_value(&mut self) -> Result<String, SelectorError> {
        match self.chars.peek().copied() {
            Some((_, quote @ ('"' | '\''))) => {
                self.chars.next();
                let mut value = String::new();
                loop {
                    match self.chars.next() {
                        Some((_, c)) if c == quote => return Ok(value),
                        Some((_, c)) => value.push(c),
                        None => return Err(self.error("unclosed quoted attribute value")),
                    }
                }
            }
            _ => self.required_ident("an attribute value"),
        }
    }
}

fn parse(input: &str) -> Result<Vec<Compound>, SelectorError> {
    let mut parser = Parser::new(input);
    let mut compounds = Vec::new();
    loop {
        parser.skip_whitespace();
        compounds.push(parser.compound()?);
        parser.skip_whitespace();
        match parser.chars.peek().copied() {
            None => return Ok(compounds),
            Some((_, ',')) => {
                parser.chars.next();
            }
            Some((_, '>' | '+' | '~')) => {
                return Err(parser.error("combinators are not supported"))
            }
            Some(_) => {
                // Anything else after a complete compound is either a
                // descendant combinator (whitespace already skipped) or
                // plain garbage.
                return Err(parser.error("combinators are not supported"));
            }
        }
    }
}
