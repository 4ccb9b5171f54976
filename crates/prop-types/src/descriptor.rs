//! Canonical prop-type trees.
//!
//! [`PropKind`] carries the kind-specific payload, so a descriptor's kind
//! always determines the shape of its arguments. The payload type is a
//! parameter: the registry stores `PropKind<Validator>` (how a validator
//! was constructed) and inference maps it to `PropKind<TypeDescriptor>`.

use indexmap::IndexMap;
use std::fmt;

use crate::validator::Validator;
use crate::value::{ClassRef, PropValue};

/// Closed set of prop-type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Array,
    Bool,
    Func,
    Number,
    Object,
    String,
    Any,
    Element,
    Node,
    Shape,
    ArrayOf,
    ObjectOf,
    InstanceOf,
    OneOf,
    OneOfType,
    Opaque,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Func => "func",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
            Self::Any => "any",
            Self::Element => "element",
            Self::Node => "node",
            Self::Shape => "shape",
            Self::ArrayOf => "arrayOf",
            Self::ObjectOf => "objectOf",
            Self::InstanceOf => "instanceOf",
            Self::OneOf => "oneOf",
            Self::OneOfType => "oneOfType",
            Self::Opaque => "opaque",
        }
    }

    /// Kinds without arguments.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Array
                | Self::Bool
                | Self::Func
                | Self::Number
                | Self::Object
                | Self::String
                | Self::Any
                | Self::Element
                | Self::Node
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropKind<T> {
    Array,
    Bool,
    Func,
    Number,
    Object,
    String,
    Any,
    Element,
    Node,
    Shape(IndexMap<String, T>),
    ArrayOf(Box<T>),
    ObjectOf(Box<T>),
    InstanceOf(ClassRef),
    OneOf(Vec<PropValue>),
    OneOfType(Vec<T>),
}

impl<T> PropKind<T> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Array => Kind::Array,
            Self::Bool => Kind::Bool,
            Self::Func => Kind::Func,
            Self::Number => Kind::Number,
            Self::Object => Kind::Object,
            Self::String => Kind::String,
            Self::Any => Kind::Any,
            Self::Element => Kind::Element,
            Self::Node => Kind::Node,
            Self::Shape(_) => Kind::Shape,
            Self::ArrayOf(_) => Kind::ArrayOf,
            Self::ObjectOf(_) => Kind::ObjectOf,
            Self::InstanceOf(_) => Kind::InstanceOf,
            Self::OneOf(_) => Kind::OneOf,
            Self::OneOfType(_) => Kind::OneOfType,
        }
    }

    /// Converts every nested payload with `f`. Literal (`OneOf`) and class
    /// (`InstanceOf`) arguments are copied verbatim.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PropKind<U> {
        match self {
            Self::Array => PropKind::Array,
            Self::Bool => PropKind::Bool,
            Self::Func => PropKind::Func,
            Self::Number => PropKind::Number,
            Self::Object => PropKind::Object,
            Self::String => PropKind::String,
            Self::Any => PropKind::Any,
            Self::Element => PropKind::Element,
            Self::Node => PropKind::Node,
            Self::Shape(fields) => {
                PropKind::Shape(fields.iter().map(|(k, v)| (k.clone(), f(v))).collect())
            }
            Self::ArrayOf(item) => PropKind::ArrayOf(Box::new(f(item))),
            Self::ObjectOf(value) => PropKind::ObjectOf(Box::new(f(value))),
            Self::InstanceOf(class) => PropKind::InstanceOf(class.clone()),
            Self::OneOf(values) => PropKind::OneOf(values.clone()),
            Self::OneOfType(alternatives) => PropKind::OneOfType(alternatives.iter().map(f).collect()),
        }
    }
}

/// A typed node of the descriptor tree.
#[derive(Debug, Clone)]
pub struct PropType {
    pub kind: PropKind<TypeDescriptor>,
    pub required: bool,
    /// Validator this node was inferred from, if any. Not part of equality.
    pub source: Option<Validator>,
}

impl PartialEq for PropType {
    fn eq(&self, other: &Self) -> bool {
        self.required == other.required && self.kind == other.kind
    }
}

/// A prop type: either structured, or an opaque validator whose structure
/// could not be recovered.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    Typed(PropType),
    Opaque(Validator),
}

impl TypeDescriptor {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Typed(t) => t.kind.kind(),
            Self::Opaque(_) => Kind::Opaque,
        }
    }

    /// Opaque descriptors are never considered required.
    pub fn is_required(&self) -> bool {
        match self {
            Self::Typed(t) => t.required,
            Self::Opaque(_) => false,
        }
    }

    /// Marks the descriptor required. Opaque descriptors are returned as is.
    pub fn required(self) -> Self {
        match self {
            Self::Typed(t) => Self::Typed(PropType {
                required: true,
                // The source validator was the optional one.
                source: t.source.map(|v| v.is_required()),
                ..t
            }),
            opaque => opaque,
        }
    }

    pub fn as_typed(&self) -> Option<&PropType> {
        match self {
            Self::Typed(t) => Some(t),
            Self::Opaque(_) => None,
        }
    }

    /// The validator to delegate checks to, when there is one.
    pub fn source(&self) -> Option<&Validator> {
        match self {
            Self::Typed(t) => t.source.as_ref(),
            Self::Opaque(v) => Some(v),
        }
    }
}

impl From<PropType> for TypeDescriptor {
    fn from(t: PropType) -> Self {
        Self::Typed(t)
    }
}
