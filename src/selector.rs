//! Selector lists for picking heading elements.
//!
//! Supports the subset of CSS selectors heading outlines are written in: comma-separated
//! alternatives of compound selectors (`h2`, `*`, `#id`, `.class`, `[attr]`, `[attr=value]`)
//! joined by descendant (whitespace) or child (`>`) combinators. Parsing is the only fallible
//! step; matching is total.

use crate::tree::DocumentTree;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a selector string cannot be parsed.
pub enum SelectorError {
    /// The input was blank.
    #[error("empty selector")]
    Empty,
    /// A compound selector was expected but none was found.
    #[error("expected a selector at position {0}")]
    ExpectedSelector(usize),
    /// `#`, `.` or `[` was not followed by a name.
    #[error("expected a name after '{ch}' at position {pos}")]
    ExpectedName {
        /// The sigil missing its name.
        ch: char,
        /// Character offset of the sigil.
        pos: usize,
    },
    /// A character that cannot appear at this point.
    #[error("unexpected character '{ch}' at position {pos}")]
    Unexpected {
        /// The offending character.
        ch: char,
        /// Character offset of the offending character.
        pos: usize,
    },
    /// An attribute selector or quoted value was never closed.
    #[error("unterminated attribute selector starting at position {0}")]
    UnterminatedAttribute(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrCondition {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
}

impl Compound {
    fn matches<T: DocumentTree>(&self, tree: &T, node: T::Node) -> bool {
        if let Some(tag) = &self.tag {
            if !tree.tag_name(node).eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if tree.attr(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let class_attr = tree.attr(node, "class").unwrap_or("");
            if !self
                .classes
                .iter()
                .all(|class| class_attr.split_whitespace().any(|c| c == class))
            {
                return false;
            }
        }
        self.attrs.iter().all(|cond| match tree.attr(node, &cond.name) {
            None => false,
            Some(actual) => cond.value.as_deref().is_none_or(|want| want == actual),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
    /// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`.
    combinators: Vec<Combinator>,
}

impl Complex {
    fn matches<T: DocumentTree>(&self, tree: &T, node: T::Node) -> bool {
        self.match_at(tree, node, self.compounds.len() - 1)
    }

    fn match_at<T: DocumentTree>(&self, tree: &T, node: T::Node, index: usize) -> bool {
        if !self.compounds[index].matches(tree, node) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match self.combinators[index - 1] {
            Combinator::Child => tree
                .parent(node)
                .is_some_and(|parent| self.match_at(tree, parent, index - 1)),
            Combinator::Descendant => {
                let mut ancestor = tree.parent(node);
                while let Some(candidate) = ancestor {
                    if self.match_at(tree, candidate, index - 1) {
                        return true;
                    }
                    ancestor = tree.parent(candidate);
                }
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A parsed selector list.
pub struct Selector {
    source: String,
    alternatives: Vec<Complex>,
}

impl Selector {
    /// Parse a selector list such as `"h1, h2"` or `"#content > h2.section"`.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] describing the first syntax problem.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let alternatives = Parser::new(input).parse_list()?;
        Ok(Self {
            source: input.trim().to_string(),
            alternatives,
        })
    }

    #[must_use]
    /// The selector text this was parsed from, trimmed.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `node` matches any alternative of the list.
    pub fn matches<T: DocumentTree>(&self, tree: &T, node: T::Node) -> bool {
        self.alternatives.iter().any(|alt| alt.matches(tree, node))
    }

    /// Every matching element, in document order and without duplicates.
    pub fn select<T: DocumentTree>(&self, tree: &T) -> Vec<T::Node> {
        tree.select(|t, node| self.matches(t, node))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns whether any whitespace was consumed.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn name(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn required_name(&mut self, sigil: char, sigil_pos: usize) -> Result<String, SelectorError> {
        let name = self.name();
        if name.is_empty() {
            Err(SelectorError::ExpectedName {
                ch: sigil,
                pos: sigil_pos,
            })
        } else {
            Ok(name)
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Complex>, SelectorError> {
        let mut alternatives = Vec::new();
        loop {
            self.skip_whitespace();
            alternatives.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                None => return Ok(alternatives),
                Some(',') => self.pos += 1,
                Some(ch) => return Err(SelectorError::Unexpected { ch, pos: self.pos }),
            }
        }
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();
        loop {
            let spaced = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    combinators.push(Combinator::Child);
                }
                Some(_) if spaced => combinators.push(Combinator::Descendant),
                Some(ch) => return Err(SelectorError::Unexpected { ch, pos: self.pos }),
            }
            compounds.push(self.parse_compound()?);
        }
        Ok(Complex {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let start = self.pos;
        let mut compound = Compound::default();

        if self.peek() == Some('*') {
            self.pos += 1;
        } else if self.peek().is_some_and(is_name_char) {
            compound.tag = Some(self.name());
        }

        while let Some(ch) = self.peek() {
            let sigil_pos = self.pos;
            match ch {
                '#' => {
                    self.pos += 1;
                    compound.id = Some(self.required_name(ch, sigil_pos)?);
                }
                '.' => {
                    self.pos += 1;
                    compound.classes.push(self.required_name(ch, sigil_pos)?);
                }
                '[' => {
                    self.pos += 1;
                    compound.attrs.push(self.parse_attr(sigil_pos)?);
                }
                _ => break,
            }
        }

        if self.pos == start {
            Err(SelectorError::ExpectedSelector(start))
        } else {
            Ok(compound)
        }
    }

    fn parse_attr(&mut self, open: usize) -> Result<AttrCondition, SelectorError> {
        self.skip_whitespace();
        let name = self.required_name('[', open)?;
        self.skip_whitespace();
        let value = match self.peek() {
            Some(']') => None,
            Some('=') => {
                self.pos += 1;
                self.skip_whitespace();
                let value = self.attr_value(open)?;
                self.skip_whitespace();
                Some(value)
            }
            Some(ch) => return Err(SelectorError::Unexpected { ch, pos: self.pos }),
            None => return Err(SelectorError::UnterminatedAttribute(open)),
        };
        match self.peek() {
            Some(']') => {
                self.pos += 1;
                Ok(AttrCondition { name, value })
            }
            Some(ch) => Err(SelectorError::Unexpected { ch, pos: self.pos }),
            None => Err(SelectorError::UnterminatedAttribute(open)),
        }
    }

    fn attr_value(&mut self, open: usize) -> Result<String, SelectorError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                while let Some(ch) = self.peek() {
                    if ch == quote {
                        let value = self.chars[start..self.pos].iter().collect();
                        self.pos += 1;
                        return Ok(value);
                    }
                    self.pos += 1;
                }
                Err(SelectorError::UnterminatedAttribute(open))
            }
            _ => Ok(self.name()),
        }
    }
}

#[cfg(test)]
#[path = "tests/selector.rs"]
mod tests;
