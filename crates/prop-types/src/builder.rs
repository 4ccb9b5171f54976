//! Direct descriptor construction, no registry involved.

use crate::descriptor::{PropKind, PropType, TypeDescriptor};
use crate::validator::Validator;
use crate::value::{ClassRef, PropValue};

/// Factory for [`TypeDescriptor`]s. Every descriptor starts optional; call
/// [`TypeDescriptor::required`] to flip it.
///
/// ```
/// use prop_sandbox_types::{Kind, T};
///
/// let user = T.shape([("name", T.string().required()), ("age", T.number())]);
/// assert_eq!(user.kind(), Kind::Shape);
/// assert!(!user.is_required());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorBuilder;

/// Global default descriptor builder.
pub static T: DescriptorBuilder = DescriptorBuilder;

fn typed(kind: PropKind<TypeDescriptor>) -> TypeDescriptor {
    TypeDescriptor::Typed(PropType {
        kind,
        required: false,
        source: None,
    })
}

impl DescriptorBuilder {
    pub fn array(&self) -> TypeDescriptor {
        typed(PropKind::Array)
    }

    pub fn bool(&self) -> TypeDescriptor {
        typed(PropKind::Bool)
    }

    pub fn func(&self) -> TypeDescriptor {
        typed(PropKind::Func)
    }

    pub fn number(&self) -> TypeDescriptor {
        typed(PropKind::Number)
    }

    pub fn object(&self) -> TypeDescriptor {
        typed(PropKind::Object)
    }

    pub fn string(&self) -> TypeDescriptor {
        typed(PropKind::String)
    }

    pub fn any(&self) -> TypeDescriptor {
        typed(PropKind::Any)
    }

    pub fn element(&self) -> TypeDescriptor {
        typed(PropKind::Element)
    }

    pub fn node(&self) -> TypeDescriptor {
        typed(PropKind::Node)
    }

    pub fn shape<K: Into<String>>(
        &self,
        fields: impl IntoIterator<Item = (K, TypeDescriptor)>,
    ) -> TypeDescriptor {
        typed(PropKind::Shape(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn array_of(&self, item: TypeDescriptor) -> TypeDescriptor {
        typed(PropKind::ArrayOf(Box::new(item)))
    }

    pub fn object_of(&self, value: TypeDescriptor) -> TypeDescriptor {
        typed(PropKind::ObjectOf(Box::new(value)))
    }

    pub fn instance_of(&self, class: ClassRef) -> TypeDescriptor {
        typed(PropKind::InstanceOf(class))
    }

    pub fn one_of<V: Into<PropValue>>(&self, values: impl IntoIterator<Item = V>) -> TypeDescriptor {
        typed(PropKind::OneOf(values.into_iter().map(Into::into).collect()))
    }

    pub fn one_of_type(
        &self,
        alternatives: impl IntoIterator<Item = TypeDescriptor>,
    ) -> TypeDescriptor {
        typed(PropKind::OneOfType(alternatives.into_iter().collect()))
    }

    /// Escape hatch for validators with no recoverable structure.
    pub fn opaque(&self, validator: Validator) -> TypeDescriptor {
        TypeDescriptor::Opaque(validator)
    }
}
