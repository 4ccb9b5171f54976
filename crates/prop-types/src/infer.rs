//! Validator -> descriptor inference.

use indexmap::IndexMap;
use tracing::trace;

use crate::component::Component;
use crate::descriptor::{PropType, TypeDescriptor};
use crate::registry::TypeRegistry;
use crate::validator::Validator;

/// Anything [`infer_type`] accepts: a validator, or a descriptor that was
/// already inferred or built directly.
#[derive(Debug, Clone)]
pub enum TypeSource {
    Validator(Validator),
    Descriptor(TypeDescriptor),
}

impl From<Validator> for TypeSource {
    fn from(v: Validator) -> Self {
        Self::Validator(v)
    }
}

impl From<&Validator> for TypeSource {
    fn from(v: &Validator) -> Self {
        Self::Validator(v.clone())
    }
}

impl From<TypeDescriptor> for TypeSource {
    fn from(d: TypeDescriptor) -> Self {
        Self::Descriptor(d)
    }
}

impl From<&TypeDescriptor> for TypeSource {
    fn from(d: &TypeDescriptor) -> Self {
        Self::Descriptor(d.clone())
    }
}

/// Canonical descriptor for `source`.
///
/// Descriptors come back unchanged, so inference is idempotent. Validators
/// unknown to `registry` come back as [`TypeDescriptor::Opaque`] holding
/// the very same validator.
pub fn infer_type(registry: &TypeRegistry, source: impl Into<TypeSource>) -> TypeDescriptor {
    match source.into() {
        TypeSource::Descriptor(descriptor) => descriptor,
        TypeSource::Validator(validator) => infer_validator(registry, &validator),
    }
}

fn infer_validator(registry: &TypeRegistry, validator: &Validator) -> TypeDescriptor {
    let Some(entry) = registry.lookup(validator) else {
        trace!(id = %validator.id(), "unregistered validator, treating as opaque");
        return TypeDescriptor::Opaque(validator.clone());
    };
    TypeDescriptor::Typed(PropType {
        kind: entry
            .construction
            .map(|nested| infer_validator(registry, nested)),
        required: entry.required,
        source: Some(validator.clone()),
    })
}

/// Infers every declared prop of `component`, keeping declaration order.
pub fn infer_types_for_component(
    registry: &TypeRegistry,
    component: &Component,
) -> IndexMap<String, TypeDescriptor> {
    component
        .prop_types
        .iter()
        .map(|(name, validator)| (name.clone(), infer_validator(registry, validator)))
        .collect()
}
