//! Fixture and prop values.
//!
//! `PropValue` is JSON plus the two things props can hold that JSON cannot:
//! callables and class instances. Both convert to `null` when serialized.

use indexmap::IndexMap;
use prop_sandbox_cursor::{CursorError, Node, PathStep};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::sync::{Arc, OnceLock};

type CallbackFn = dyn Fn(&[PropValue]) -> PropValue + Send + Sync;

/// Shared callable prop value. Compared by identity.
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    pub fn new(f: impl Fn(&[PropValue]) -> PropValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// The shared placeholder callable: ignores its arguments, returns `null`.
    pub fn noop() -> Self {
        static NOOP: OnceLock<Callback> = OnceLock::new();
        NOOP.get_or_init(|| Callback::new(|_| PropValue::Null)).clone()
    }

    pub fn call(&self, args: &[PropValue]) -> PropValue {
        (self.0)(args)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Opaque class handle for `instanceOf` checks. Two handles are equal only
/// if they were cloned from the same [`ClassRef::new`] call.
#[derive(Clone)]
pub struct ClassRef(Arc<str>);

impl ClassRef {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassRef({})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum PropValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<PropValue>),
    Object(IndexMap<String, PropValue>),
    Func(Callback),
    Instance(ClassRef),
}

impl PropValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<PropValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, PropValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the value's type as reported in validation errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) | Self::Instance(_) => "object",
            Self::Func(_) => "function",
        }
    }

    /// Equality used by `oneOf`: numbers compare by numeric value, so `1`
    /// matches `1.0`.
    pub fn loose_eq(&self, other: &PropValue) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.as_f64() == b.as_f64(),
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, x)| b.get(k).is_some_and(|y| x.loose_eq(y)))
            }
            _ => self == other,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Null | Self::Func(_) | Self::Instance(_) => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(arr) => Value::Array(arr.iter().map(Self::to_json).collect()),
            Self::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("[function]"),
            Self::Instance(class) => write!(f, "[{}]", class.name()),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(arr) => Self::Array(arr.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<PropValue> for Value {
    fn from(value: PropValue) -> Self {
        value.to_json()
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

/// Non-finite floats become `null`.
impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Callback> for PropValue {
    fn from(f: Callback) -> Self {
        Self::Func(f)
    }
}

impl From<ClassRef> for PropValue {
    fn from(class: ClassRef) -> Self {
        Self::Instance(class)
    }
}

impl Node for PropValue {
    fn type_name(&self) -> &'static str {
        PropValue::type_name(self)
    }

    fn child(&self, step: &PathStep) -> Option<&Self> {
        match self {
            Self::Array(arr) => arr.get(step.as_index()?),
            Self::Object(map) => map.get(&*step.as_key()),
            _ => None,
        }
    }

    fn child_mut(&mut self, step: &PathStep) -> Option<&mut Self> {
        match self {
            Self::Array(arr) => arr.get_mut(step.as_index()?),
            Self::Object(map) => map.get_mut(&*step.as_key()),
            _ => None,
        }
    }

    fn set_child(&mut self, step: &PathStep, value: Self) -> Result<(), CursorError> {
        match self {
            Self::Array(arr) => prop_sandbox_cursor::set_array_slot(arr, step, value),
            Self::Object(map) => {
                map.insert(step.as_key().into_owned(), value);
                Ok(())
            }
            other => Err(CursorError::NotContainer {
                step: step.to_string(),
                found: PropValue::type_name(other),
            }),
        }
    }
}
