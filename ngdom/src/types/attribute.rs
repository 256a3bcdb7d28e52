use std::collections::BTreeMap;
use std::fmt;

/// Attribute map of an element, ordered by rendered key.
pub type Attributes = BTreeMap<&'static str, AttributeValue>;

/// A closed set of attribute keys.
///
/// Implemented by enums only, so an element can never carry a key that
/// was assembled from a runtime string.
pub trait AttributeKey: Copy {
    /// The key as written into markup.
    fn key(&self) -> &'static str;
}

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    Bool(bool),
    Text(String),
    Integer(i64),
}

impl AttributeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Attributes every HTML element accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalAttribute {
    Id,
    Class,
    Style,
    Title,
}

impl AttributeKey for GlobalAttribute {
    fn key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Class => "class",
            Self::Style => "style",
            Self::Title => "title",
        }
    }
}
