//! Fixture cursors.
//!
//! A cursor is an ordered list of [`PathStep`]s locating a value inside a
//! nested fixture tree. Editors hand cursors back to the store, which
//! applies point updates with [`update`] while leaving sibling data alone.
//!
//! # Example
//!
//! ```
//! use prop_sandbox_cursor::{get, update, Cursor};
//! use serde_json::json;
//!
//! let doc = json!({"instances": [{"a": 1}]});
//! let cursor: Cursor = vec!["instances".into(), 0usize.into(), "a".into()];
//! let next = update(&doc, &cursor, json!(2)).unwrap();
//! assert_eq!(next, json!({"instances": [{"a": 2}]}));
//! assert_eq!(get(&doc, &cursor), Some(&json!(1)));
//! ```

use thiserror::Error;

pub mod node;
pub mod types;

pub use node::Node;
pub use types::{Cursor, PathStep};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor pointer must be absolute or empty")]
    NotAbsolute,
    #[error("nothing at `{at}`")]
    NotFound { at: String },
    #[error("cannot step into {found} with `{step}`")]
    NotContainer { step: String, found: &'static str },
    #[error("`{step}` is not an array index")]
    InvalidIndex { step: String },
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Unescapes one pointer component (`~1` -> `/`, `~0` -> `~`).
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one pointer component (`~` -> `~0`, `/` -> `~1`).
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Whether `s` is a canonical non-negative integer (no leading zeros).
pub fn is_valid_index(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}

/// Formats a cursor as an RFC 6901 pointer. The root cursor is `""`.
///
/// ```
/// use prop_sandbox_cursor::format_cursor;
///
/// assert_eq!(format_cursor(&[]), "");
/// assert_eq!(format_cursor(&[0usize.into(), "a/b".into()]), "/0/a~1b");
/// ```
pub fn format_cursor(cursor: &[PathStep]) -> String {
    let mut out = String::new();
    for step in cursor {
        out.push('/');
        out.push_str(&escape_component(&step.as_key()));
    }
    out
}

/// Parses an RFC 6901 pointer. Canonical integers become
/// [`PathStep::Index`], everything else [`PathStep::Key`].
pub fn parse_cursor(pointer: &str) -> Result<Cursor, CursorError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(CursorError::NotAbsolute);
    };
    Ok(rest
        .split('/')
        .map(|component| match component.parse::<usize>() {
            Ok(index) if is_valid_index(component) => PathStep::Index(index),
            _ => PathStep::Key(unescape_component(component)),
        })
        .collect())
}

/// Parent of `cursor`, or `None` at the root.
pub fn parent(cursor: &[PathStep]) -> Option<&[PathStep]> {
    cursor.split_last().map(|(_, init)| init)
}

/// Value at `cursor`, if every step resolves.
pub fn get<'a, N: Node>(doc: &'a N, cursor: &[PathStep]) -> Option<&'a N> {
    cursor.iter().try_fold(doc, |node, step| node.child(step))
}

pub fn get_mut<'a, N: Node>(doc: &'a mut N, cursor: &[PathStep]) -> Option<&'a mut N> {
    cursor.iter().try_fold(doc, |node, step| node.child_mut(step))
}

/// Stores `value` at `cursor` in place. The empty cursor replaces the
/// whole document. Every container on the way must already exist.
pub fn set<N: Node>(doc: &mut N, cursor: &[PathStep], value: N) -> Result<(), CursorError> {
    let Some((last, init)) = cursor.split_last() else {
        *doc = value;
        return Ok(());
    };
    let container = get_mut(doc, init).ok_or_else(|| CursorError::NotFound {
        at: format_cursor(init),
    })?;
    container.set_child(last, value)
}

/// Returns a copy of `doc` with `value` stored at `cursor`.
pub fn update<N: Node>(doc: &N, cursor: &[PathStep], value: N) -> Result<N, CursorError> {
    let mut next = doc.clone();
    set(&mut next, cursor, value)?;
    Ok(next)
}

/// Shared array-slot assignment for [`Node`] implementations.
pub fn set_array_slot<N>(arr: &mut Vec<N>, step: &PathStep, value: N) -> Result<(), CursorError> {
    let index = step.as_index().ok_or_else(|| CursorError::InvalidIndex {
        step: step.to_string(),
    })?;
    match index.cmp(&arr.len()) {
        std::cmp::Ordering::Less => arr[index] = value,
        std::cmp::Ordering::Equal => arr.push(value),
        std::cmp::Ordering::Greater => {
            return Err(CursorError::IndexOutOfBounds {
                index,
                len: arr.len(),
            })
        }
    }
    Ok(())
}
