//! Checking values against validators and descriptors.
//!
//! Validation goes through the declaring validator whenever one is known,
//! so results match the component's own declaration exactly, custom
//! validators included. Descriptors built without a validator are checked
//! structurally.

use std::panic::{self, AssertUnwindSafe};

use crate::component::Component;
use crate::descriptor::{PropKind, TypeDescriptor};
use crate::error::PropTypeError;
use crate::prop_types::matches_scalar;
use crate::validator::{Props, Validator};
use crate::value::PropValue;

const CARRIER_PROP: &str = "value";
const CARRIER_COMPONENT: &str = "<<anonymous>>";

/// Runs `validator`, turning a panic into [`PropTypeError::Panicked`].
fn run_guarded(
    validator: &Validator,
    props: &Props,
    prop: &str,
    component: &str,
) -> Result<(), PropTypeError> {
    panic::catch_unwind(AssertUnwindSafe(|| validator.check(props, prop, component))).unwrap_or_else(
        |_| {
            Err(PropTypeError::Panicked {
                prop: prop.to_string(),
            })
        },
    )
}

/// Whether `value` passes `validator`. The value is checked as the only
/// property of a synthetic props object; `null` counts as absent.
pub fn value_satisfies_type(value: &PropValue, validator: &Validator) -> bool {
    let carrier = Props::from([(CARRIER_PROP.to_string(), value.clone())]);
    run_guarded(validator, &carrier, CARRIER_PROP, CARRIER_COMPONENT).is_ok()
}

/// Whether `value` satisfies `descriptor`.
pub fn value_satisfies_descriptor(value: &PropValue, descriptor: &TypeDescriptor) -> bool {
    match descriptor.source() {
        Some(validator) => value_satisfies_type(value, validator),
        None => satisfies_structurally(Some(value), descriptor),
    }
}

fn satisfies_structurally(value: Option<&PropValue>, descriptor: &TypeDescriptor) -> bool {
    let t = match descriptor {
        TypeDescriptor::Opaque(validator) => {
            return value_satisfies_type(value.unwrap_or(&PropValue::Null), validator)
        }
        TypeDescriptor::Typed(t) => t,
    };
    if let Some(validator) = &t.source {
        return value_satisfies_type(value.unwrap_or(&PropValue::Null), validator);
    }
    let value = match value {
        None | Some(PropValue::Null) => return !t.required,
        Some(value) => value,
    };
    match (&t.kind, value) {
        (PropKind::Shape(fields), PropValue::Object(map)) => fields
            .iter()
            .all(|(key, field)| satisfies_structurally(map.get(key), field)),
        (PropKind::ArrayOf(item), PropValue::Array(items)) => items
            .iter()
            .all(|element| satisfies_structurally(Some(element), item)),
        (PropKind::ObjectOf(entry), PropValue::Object(map)) => map
            .values()
            .all(|element| satisfies_structurally(Some(element), entry)),
        (PropKind::InstanceOf(class), PropValue::Instance(actual)) => class == actual,
        (PropKind::OneOf(values), value) => values.iter().any(|v| v.loose_eq(value)),
        (PropKind::OneOfType(alternatives), value) => alternatives
            .iter()
            .any(|alternative| satisfies_structurally(Some(value), alternative)),
        (kind, value) => matches_scalar(kind.kind(), value),
    }
}

/// Every declared prop of `component` that `props` violates, in
/// declaration order.
pub fn invalid_props(component: &Component, props: &Props) -> Vec<PropTypeError> {
    component
        .prop_types
        .iter()
        .filter_map(|(name, validator)| {
            run_guarded(validator, props, name, &component.display_name).err()
        })
        .collect()
}
