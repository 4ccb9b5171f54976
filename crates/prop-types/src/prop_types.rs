//! The validator constructor library.
//!
//! `PropTypes` mirrors the component framework's built-in validators:
//! nine scalar validators plus six composite constructors. A library
//! patched with a [`TypeRegistry`] records every validator it hands out,
//! which is what lets [`infer_type`](crate::infer_type) recover structure.

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

use crate::descriptor::{Kind, PropKind};
use crate::error::PropTypeError;
use crate::registry::TypeRegistry;
use crate::validator::{CheckContext, Validator};
use crate::value::{ClassRef, PropValue};

/// Whether `value` (present and non-null) has the shape a scalar kind
/// accepts. Composite kinds are never matched here.
pub(crate) fn matches_scalar(kind: Kind, value: &PropValue) -> bool {
    match kind {
        Kind::Any => true,
        Kind::Array => matches!(value, PropValue::Array(_)),
        Kind::Bool => matches!(value, PropValue::Bool(_)),
        Kind::Func => matches!(value, PropValue::Func(_)),
        Kind::Number => matches!(value, PropValue::Number(_)),
        Kind::Object => matches!(value, PropValue::Object(_) | PropValue::Instance(_)),
        Kind::String => matches!(value, PropValue::String(_)),
        // Rendered elements live in fixtures as markup text or as element
        // objects.
        Kind::Element => matches!(value, PropValue::String(_) | PropValue::Object(_)),
        Kind::Node => is_node(value),
        _ => false,
    }
}

fn is_node(value: &PropValue) -> bool {
    match value {
        PropValue::Null
        | PropValue::Number(_)
        | PropValue::String(_)
        | PropValue::Bool(false)
        | PropValue::Object(_) => true,
        PropValue::Array(items) => items.iter().all(is_node),
        PropValue::Bool(true) | PropValue::Func(_) | PropValue::Instance(_) => false,
    }
}

fn scalar(kind: Kind) -> Validator {
    Validator::chainable(move |value, ctx| {
        if matches_scalar(kind, value) {
            Ok(())
        } else {
            Err(ctx.invalid_type(value, kind.as_str()))
        }
    })
}

fn nested_name(prop: &str, key: &str) -> String {
    format!("{prop}.{key}")
}

fn indexed_name(prop: &str, index: usize) -> String {
    format!("{prop}[{index}]")
}

#[derive(Clone)]
pub struct PropTypes {
    array: Validator,
    bool: Validator,
    func: Validator,
    number: Validator,
    object: Validator,
    string: Validator,
    any: Validator,
    element: Validator,
    node: Validator,
    registry: Option<Arc<TypeRegistry>>,
}

impl Default for PropTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl PropTypes {
    /// An unpatched library: its validators work but leave no trace, so
    /// inference treats all of them as opaque.
    pub fn new() -> Self {
        Self {
            array: scalar(Kind::Array),
            bool: scalar(Kind::Bool),
            func: scalar(Kind::Func),
            number: scalar(Kind::Number),
            object: scalar(Kind::Object),
            string: scalar(Kind::String),
            any: scalar(Kind::Any),
            element: scalar(Kind::Element),
            node: scalar(Kind::Node),
            registry: None,
        }
    }

    pub fn patched(registry: &Arc<TypeRegistry>) -> Self {
        let mut prop_types = Self::new();
        prop_types.patch(registry);
        prop_types
    }

    /// Records the scalar validators in `registry` and makes every
    /// composite constructor record what it builds from now on. Patching
    /// again with the same registry changes nothing.
    pub fn patch(&mut self, registry: &Arc<TypeRegistry>) {
        if self
            .registry
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, registry))
        {
            return;
        }
        for (construction, validator) in [
            (PropKind::Array, &self.array),
            (PropKind::Bool, &self.bool),
            (PropKind::Func, &self.func),
            (PropKind::Number, &self.number),
            (PropKind::Object, &self.object),
            (PropKind::String, &self.string),
            (PropKind::Any, &self.any),
            (PropKind::Element, &self.element),
            (PropKind::Node, &self.node),
        ] {
            registry.register(construction, validator);
        }
        debug!(entries = registry.len(), "patched prop types");
        self.registry = Some(registry.clone());
    }

    pub fn is_patched(&self) -> bool {
        self.registry.is_some()
    }

    fn record(&self, construction: PropKind<Validator>, validator: Validator) -> Validator {
        if let Some(registry) = &self.registry {
            registry.register(construction, &validator);
        }
        validator
    }

    pub fn array(&self) -> Validator {
        self.array.clone()
    }

    pub fn bool(&self) -> Validator {
        self.bool.clone()
    }

    pub fn func(&self) -> Validator {
        self.func.clone()
    }

    pub fn number(&self) -> Validator {
        self.number.clone()
    }

    pub fn object(&self) -> Validator {
        self.object.clone()
    }

    pub fn string(&self) -> Validator {
        self.string.clone()
    }

    pub fn any(&self) -> Validator {
        self.any.clone()
    }

    pub fn element(&self) -> Validator {
        self.element.clone()
    }

    pub fn node(&self) -> Validator {
        self.node.clone()
    }

    /// An object whose listed fields each satisfy their validator. Unlisted
    /// fields are allowed.
    pub fn shape<K: Into<String>>(
        &self,
        fields: impl IntoIterator<Item = (K, Validator)>,
    ) -> Validator {
        let fields: IndexMap<String, Validator> =
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let checked = fields.clone();
        let validator = Validator::chainable(move |value, ctx| {
            let PropValue::Object(map) = value else {
                return Err(ctx.invalid_type(value, "object"));
            };
            for (key, field) in &checked {
                let prop = nested_name(ctx.prop, key);
                field.check_value(
                    map.get(key),
                    &CheckContext {
                        component: ctx.component,
                        prop: &prop,
                    },
                )?;
            }
            Ok(())
        });
        self.record(PropKind::Shape(fields), validator)
    }

    pub fn array_of(&self, item: Validator) -> Validator {
        let checked = item.clone();
        let validator = Validator::chainable(move |value, ctx| {
            let PropValue::Array(items) = value else {
                return Err(ctx.invalid_type(value, "array"));
            };
            for (index, element) in items.iter().enumerate() {
                let prop = indexed_name(ctx.prop, index);
                checked.check_value(
                    Some(element),
                    &CheckContext {
                        component: ctx.component,
                        prop: &prop,
                    },
                )?;
            }
            Ok(())
        });
        self.record(PropKind::ArrayOf(Box::new(item)), validator)
    }

    pub fn object_of(&self, value_type: Validator) -> Validator {
        let checked = value_type.clone();
        let validator = Validator::chainable(move |value, ctx| {
            let PropValue::Object(map) = value else {
                return Err(ctx.invalid_type(value, "object"));
            };
            for (key, entry) in map {
                let prop = nested_name(ctx.prop, key);
                checked.check_value(
                    Some(entry),
                    &CheckContext {
                        component: ctx.component,
                        prop: &prop,
                    },
                )?;
            }
            Ok(())
        });
        self.record(PropKind::ObjectOf(Box::new(value_type)), validator)
    }

    pub fn instance_of(&self, class: ClassRef) -> Validator {
        let expected = class.clone();
        let validator = Validator::chainable(move |value, ctx| match value {
            PropValue::Instance(actual) if *actual == expected => Ok(()),
            other => Err(PropTypeError::NotInstance {
                prop: ctx.prop.to_string(),
                component: ctx.component.to_string(),
                found: other.type_name(),
                class: expected.name().to_string(),
            }),
        });
        self.record(PropKind::InstanceOf(class), validator)
    }

    pub fn one_of<V: Into<PropValue>>(&self, values: impl IntoIterator<Item = V>) -> Validator {
        let values: Vec<PropValue> = values.into_iter().map(Into::into).collect();
        let allowed = values.clone();
        let validator = Validator::chainable(move |value, ctx| {
            if allowed.iter().any(|candidate| candidate.loose_eq(value)) {
                return Ok(());
            }
            let expected = allowed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Err(PropTypeError::NotOneOf {
                prop: ctx.prop.to_string(),
                component: ctx.component.to_string(),
                value: value.to_string(),
                expected: format!("[{expected}]"),
            })
        });
        self.record(PropKind::OneOf(values), validator)
    }

    pub fn one_of_type(&self, alternatives: impl IntoIterator<Item = Validator>) -> Validator {
        let alternatives: Vec<Validator> = alternatives.into_iter().collect();
        let checked = alternatives.clone();
        let validator = Validator::chainable(move |value, ctx| {
            if checked
                .iter()
                .any(|alternative| alternative.check_value(Some(value), ctx).is_ok())
            {
                Ok(())
            } else {
                Err(PropTypeError::NoMatchingType {
                    prop: ctx.prop.to_string(),
                    component: ctx.component.to_string(),
                })
            }
        });
        self.record(PropKind::OneOfType(alternatives), validator)
    }
}
