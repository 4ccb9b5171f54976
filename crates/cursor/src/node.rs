//! Tree abstraction the cursor operations walk.

use serde_json::Value;

use crate::types::PathStep;
use crate::CursorError;

/// A value tree addressable by [`PathStep`]s.
///
/// Only arrays and objects have children. Implementations decide how a
/// step maps onto their containers; see [`PathStep::as_index`] and
/// [`PathStep::as_key`].
pub trait Node: Clone {
    /// Short name of the node's type, used in error messages.
    fn type_name(&self) -> &'static str;

    fn child(&self, step: &PathStep) -> Option<&Self>;

    fn child_mut(&mut self, step: &PathStep) -> Option<&mut Self>;

    /// Stores `value` under `step`. An array index equal to the array's
    /// length appends.
    fn set_child(&mut self, step: &PathStep, value: Self) -> Result<(), CursorError>;
}

impl Node for Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn child(&self, step: &PathStep) -> Option<&Self> {
        match self {
            Value::Array(arr) => arr.get(step.as_index()?),
            Value::Object(map) => map.get(&*step.as_key()),
            _ => None,
        }
    }

    fn child_mut(&mut self, step: &PathStep) -> Option<&mut Self> {
        match self {
            Value::Array(arr) => arr.get_mut(step.as_index()?),
            Value::Object(map) => map.get_mut(&*step.as_key()),
            _ => None,
        }
    }

    fn set_child(&mut self, step: &PathStep, value: Self) -> Result<(), CursorError> {
        match self {
            Value::Array(arr) => crate::set_array_slot(arr, step, value),
            Value::Object(map) => {
                map.insert(step.as_key().into_owned(), value);
                Ok(())
            }
            other => Err(CursorError::NotContainer {
                step: step.to_string(),
                found: other.type_name(),
            }),
        }
    }
}
