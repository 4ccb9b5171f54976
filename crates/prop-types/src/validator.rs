//! Validator handles.
//!
//! A [`Validator`] is the unit components declare their props with. Each
//! handle has a stable [`ValidatorId`]; clones share it. Validators built
//! by [`Validator::chainable`] come in pairs: the optional validator and
//! its required counterpart, reachable through [`Validator::is_required`].

use indexmap::IndexMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::PropTypeError;
use crate::value::PropValue;

/// Props handed to a component, keyed by prop name.
pub type Props = IndexMap<String, PropValue>;

/// Where a check is running: the component and the full prop name.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub component: &'a str,
    pub prop: &'a str,
}

impl CheckContext<'_> {
    pub fn required(&self) -> PropTypeError {
        PropTypeError::Required {
            prop: self.prop.to_string(),
            component: self.component.to_string(),
        }
    }

    pub fn invalid_type(&self, found: &PropValue, expected: &'static str) -> PropTypeError {
        PropTypeError::InvalidType {
            prop: self.prop.to_string(),
            component: self.component.to_string(),
            found: found.type_name(),
            expected,
        }
    }
}

/// Checks a present, non-null value.
pub type TypeCheckFn = dyn Fn(&PropValue, &CheckContext<'_>) -> Result<(), PropTypeError> + Send + Sync;

/// User-supplied validator: `(props, prop_name, component_name)`.
pub type CustomFn = dyn Fn(&Props, &str, &str) -> Result<(), PropTypeError> + Send + Sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidatorId(pub u64);

impl ValidatorId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

enum Check {
    Typed {
        check: Arc<TypeCheckFn>,
        required: bool,
    },
    Custom(Arc<CustomFn>),
}

struct Inner {
    id: ValidatorId,
    check: Check,
    required_variant: Option<Validator>,
}

#[derive(Clone)]
pub struct Validator(Arc<Inner>);

impl Validator {
    /// Builds an optional validator and its required counterpart around one
    /// type check. Absent and `null` values skip `check`: they pass the
    /// optional validator and fail the required one.
    pub fn chainable(
        check: impl Fn(&PropValue, &CheckContext<'_>) -> Result<(), PropTypeError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        let check: Arc<TypeCheckFn> = Arc::new(check);
        let required = Self(Arc::new(Inner {
            id: ValidatorId::next(),
            check: Check::Typed {
                check: check.clone(),
                required: true,
            },
            required_variant: None,
        }));
        Self(Arc::new(Inner {
            id: ValidatorId::next(),
            check: Check::Typed {
                check,
                required: false,
            },
            required_variant: Some(required),
        }))
    }

    /// Wraps an arbitrary validation function. Custom validators carry no
    /// structure and have no required counterpart.
    pub fn custom(
        f: impl Fn(&Props, &str, &str) -> Result<(), PropTypeError> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(Inner {
            id: ValidatorId::next(),
            check: Check::Custom(Arc::new(f)),
            required_variant: None,
        }))
    }

    pub fn id(&self) -> ValidatorId {
        self.0.id
    }

    /// The required counterpart. Every call returns the same identity.
    /// Required and custom validators return themselves.
    pub fn is_required(&self) -> Validator {
        self.0
            .required_variant
            .clone()
            .unwrap_or_else(|| self.clone())
    }

    /// Whether this is the required half of a chainable pair.
    pub fn required(&self) -> bool {
        matches!(self.0.check, Check::Typed { required: true, .. })
    }

    pub(crate) fn required_variant(&self) -> Option<&Validator> {
        self.0.required_variant.as_ref()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.0.check, Check::Custom(_))
    }

    /// Validates `props[prop_name]` on behalf of `component_name`.
    pub fn check(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
    ) -> Result<(), PropTypeError> {
        let ctx = CheckContext {
            component: component_name,
            prop: prop_name,
        };
        match &self.0.check {
            Check::Custom(f) => f(props, prop_name, component_name),
            Check::Typed { .. } => self.check_value(props.get(prop_name), &ctx),
        }
    }

    /// Validates a single value; `None` means the prop is absent. Nested
    /// checks use this with the nested prop's full name.
    pub fn check_value(
        &self,
        value: Option<&PropValue>,
        ctx: &CheckContext<'_>,
    ) -> Result<(), PropTypeError> {
        match &self.0.check {
            Check::Typed { check, required } => match value {
                None | Some(PropValue::Null) if *required => Err(ctx.required()),
                None | Some(PropValue::Null) => Ok(()),
                Some(value) => check(value, ctx),
            },
            Check::Custom(f) => {
                let mut carrier = Props::new();
                if let Some(value) = value {
                    carrier.insert(ctx.prop.to_string(), value.clone());
                }
                f(&carrier, ctx.prop, ctx.component)
            }
        }
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Validator {}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.check {
            Check::Typed { required, .. } => {
                write!(f, "Validator({}, required: {})", self.id(), required)
            }
            Check::Custom(_) => write!(f, "Validator({}, custom)", self.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings() -> Validator {
        Validator::chainable(|value, ctx| match value {
            PropValue::String(_) => Ok(()),
            other => Err(ctx.invalid_type(other, "string")),
        })
    }

    fn props(value: PropValue) -> Props {
        Props::from([("p".to_string(), value)])
    }

    #[test]
    fn required_counterpart_is_stable() {
        let v = strings();
        assert_eq!(v.is_required(), v.is_required());
        assert_ne!(v, v.is_required());
        assert!(v.is_required().required());
        assert!(!v.required());
        assert_eq!(v.is_required().is_required(), v.is_required());
    }

    #[test]
    fn optional_accepts_absent_and_null() {
        let v = strings();
        assert!(v.check(&Props::new(), "p", "C").is_ok());
        assert!(v.check(&props(PropValue::Null), "p", "C").is_ok());
        assert!(v.check(&props(1.into()), "p", "C").is_err());
    }

    #[test]
    fn required_rejects_absent() {
        let v = strings().is_required();
        assert_eq!(
            v.check(&Props::new(), "p", "C"),
            Err(PropTypeError::Required {
                prop: "p".to_string(),
                component: "C".to_string()
            })
        );
        assert!(v.check(&props("x".into()), "p", "C").is_ok());
    }

    #[test]
    fn custom_sees_single_property_carrier() {
        let v = Validator::custom(|props, prop, _| {
            assert_eq!(props.len(), 1);
            match props.get(prop) {
                Some(PropValue::Bool(true)) => Ok(()),
                _ => Err(PropTypeError::custom("want true")),
            }
        });
        let ctx = CheckContext {
            component: "C",
            prop: "flag",
        };
        assert!(v.check_value(Some(&PropValue::Bool(true)), &ctx).is_ok());
        assert!(v.check_value(Some(&PropValue::Bool(false)), &ctx).is_err());
        assert!(v.is_custom());
        assert_eq!(v.is_required(), v);
    }
}
