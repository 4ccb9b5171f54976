//! Value generators.
//!
//! - `default.rs` - deterministic minimal values, used to backfill fixtures
//! - `random.rs` - randomized values for preview fuzzing

use std::collections::HashMap;

use prop_sandbox_cursor::{Cursor, PathStep};

use crate::value::PropValue;

pub mod default;
pub mod random;

/// Settings for [`generate_value_for_type`](crate::generate_value_for_type).
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Values to use verbatim at specific paths of the prop tree, in place
    /// of whatever the descriptor would generate there.
    pub overrides: HashMap<Cursor, PropValue>,
}

impl GenerateConfig {
    pub fn with_override(mut self, path: Cursor, value: impl Into<PropValue>) -> Self {
        self.overrides.insert(path, value.into());
        self
    }

    pub(crate) fn override_at(&self, path: &[PathStep]) -> Option<&PropValue> {
        self.overrides.get(path)
    }
}

pub(crate) fn child_path(path: &[PathStep], step: impl Into<PathStep>) -> Cursor {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(step.into());
    child
}
