//! Field-type selector used to pick the fields inside a form.

use dom::{Document, Id};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ELEMENTS: &str = ":text,:password,textarea";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    Empty,
    EmptyAlternative(usize),
    Unsupported(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "selector is empty"),
            Self::EmptyAlternative(i) => write!(f, "selector alternative {i} is empty"),
            Self::Unsupported(token) => write!(f, "unsupported selector `{token}`"),
        }
    }
}

impl std::error::Error for SelectorError {}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Matcher {
    /// `:text`
    Text,
    /// `:password`
    Password,
    /// `textarea`, `input`, ...
    Tag(String),
    /// `input[type=email]`
    TagType { tag: String, ty: String },
}

impl Matcher {
    fn matches(&self, doc: &Document, id: Id) -> bool {
        match self {
            Matcher::Text => input_type(doc, id).is_some_and(|t| t.eq_ignore_ascii_case("text")),
            Matcher::Password => is_masked(doc, id),
            Matcher::Tag(tag) => doc.is_element(id, tag),
            Matcher::TagType { tag, ty } => {
                doc.is_element(id, tag)
                    && doc
                        .attr(id, "type")
                        .is_some_and(|t| t.trim().eq_ignore_ascii_case(ty))
            }
        }
    }

    fn parse(token: &str) -> Result<Self, SelectorError> {
        let lower = token.to_ascii_lowercase();
        match lower.as_str() {
            ":text" => return Ok(Matcher::Text),
            ":password" => return Ok(Matcher::Password),
            _ => {}
        }
        if let Some((tag, rest)) = lower.split_once('[') {
            let inner = rest
                .strip_suffix(']')
                .ok_or_else(|| SelectorError::Unsupported(token.to_string()))?;
            let (key, value) = inner
                .split_once('=')
                .ok_or_else(|| SelectorError::Unsupported(token.to_string()))?;
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            if key.trim() != "type" || !is_tag_name(tag) || value.is_empty() {
                return Err(SelectorError::Unsupported(token.to_string()));
            }
            return Ok(Matcher::TagType {
                tag: tag.to_string(),
                ty: value.to_string(),
            });
        }
        if is_tag_name(&lower) {
            return Ok(Matcher::Tag(lower));
        }
        Err(SelectorError::Unsupported(token.to_string()))
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Text => f.write_str(":text"),
            Matcher::Password => f.write_str(":password"),
            Matcher::Tag(tag) => f.write_str(tag),
            Matcher::TagType { tag, ty } => write!(f, "{tag}[type={ty}]"),
        }
    }
}

fn is_tag_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Comma-separated list of field matchers, e.g. `:text,:password,textarea`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct FieldSelector {
    alternatives: Vec<Matcher>,
}

impl FieldSelector {
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        if s.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let alternatives = s
            .split(',')
            .enumerate()
            .map(|(i, token)| match token.trim() {
                "" => Err(SelectorError::EmptyAlternative(i)),
                token => Matcher::parse(token),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { alternatives })
    }

    pub fn matches(&self, doc: &Document, id: Id) -> bool {
        self.alternatives.iter().any(|m| m.matches(doc, id))
    }
}

impl Default for FieldSelector {
    fn default() -> Self {
        Self {
            alternatives: vec![
                Matcher::Text,
                Matcher::Password,
                Matcher::Tag("textarea".to_string()),
            ],
        }
    }
}

impl FromStr for FieldSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldSelector {
    type Error = SelectorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

/// Effective type of an `<input>`; a missing or blank `type` means `text`.
/// `None` for anything that is not an input.
pub fn input_type(doc: &Document, id: Id) -> Option<&str> {
    if !doc.is_element(id, "input") {
        return None;
    }
    match doc.attr(id, "type").map(str::trim) {
        Some(t) if !t.is_empty() => Some(t),
        _ => Some("text"),
    }
}

/// Masked fields obscure their characters, so placeholder text cannot be
/// shown inside them.
pub fn is_masked(doc: &Document, id: Id) -> bool {
    input_type(doc, id).is_some_and(|t| t.eq_ignore_ascii_case("password"))
}

/// Elements that hold editable text at all.
pub fn is_text_field(doc: &Document, id: Id) -> bool {
    if doc.is_element(id, "textarea") {
        return true;
    }
    input_type(doc, id).is_some_and(|t| {
        !["checkbox", "radio", "submit", "button", "reset", "image", "file", "hidden"]
            .iter()
            .any(|other| t.eq_ignore_ascii_case(other))
    })
}
