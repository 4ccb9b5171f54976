//! Cursor path types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a cursor: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Index(usize),
    Key(String),
}

/// Ordered path locating a value inside a fixture tree.
pub type Cursor = Vec<PathStep>;

impl PathStep {
    /// Array index this step addresses, if any.
    ///
    /// Keys that spell a canonical non-negative integer address array
    /// elements too, mirroring how fixture paths are written by hand.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Key(k) if crate::is_valid_index(k) => k.parse().ok(),
            Self::Key(_) => None,
        }
    }

    /// Object key this step addresses.
    pub fn as_key(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Self::Index(i) => std::borrow::Cow::Owned(i.to_string()),
            Self::Key(k) => std::borrow::Cow::Borrowed(k),
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_address_indexes() {
        assert_eq!(PathStep::from("3").as_index(), Some(3));
        assert_eq!(PathStep::from("03").as_index(), None);
        assert_eq!(PathStep::from("a").as_index(), None);
        assert_eq!(PathStep::from(7usize).as_index(), Some(7));
    }

    #[test]
    fn index_renders_as_key() {
        assert_eq!(PathStep::from(2usize).as_key(), "2");
        assert_eq!(PathStep::from("x").to_string(), "x");
    }

    #[test]
    fn serializes_untagged() {
        let cursor: Cursor = vec![0usize.into(), "a".into()];
        assert_eq!(serde_json::to_string(&cursor).unwrap(), r#"[0,"a"]"#);
        let back: Cursor = serde_json::from_str(r#"[0,"a"]"#).unwrap();
        assert_eq!(back, cursor);
    }
}
