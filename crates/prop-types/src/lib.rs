//! `prop-sandbox-types` - the prop-type engine behind the fixture sandbox.
//!
//! Components declare their props with [`Validator`]s built from a
//! [`PropTypes`] library. Once the library is patched with a
//! [`TypeRegistry`], every validator it builds can be turned back into a
//! [`TypeDescriptor`] tree by [`infer_type`]. Descriptors drive the
//! editors, the default fixture values ([`generate_value_for_type`]) and
//! preview fuzzing ([`generate_random_value_for_type`]).
//!
//! ```
//! use std::sync::Arc;
//! use prop_sandbox_types::{generate_value_for_type, infer_type, GenerateConfig, PropTypes, PropValue, TypeRegistry};
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let pt = PropTypes::patched(&registry);
//! let shape = pt.shape([("s", pt.string().is_required()), ("n", pt.number())]).is_required();
//! let descriptor = infer_type(&registry, &shape);
//! let value = generate_value_for_type(&descriptor, &[], &GenerateConfig::default());
//! assert_eq!(value, PropValue::from(serde_json::json!({"s": "", "n": null})));
//! ```

pub mod builder;
pub mod component;
pub mod descriptor;
pub mod error;
pub mod generate;
pub mod infer;
pub mod prop_types;
pub mod registry;
pub mod validate;
pub mod validator;
pub mod value;

pub use builder::{DescriptorBuilder, T};
pub use component::Component;
pub use descriptor::{Kind, PropKind, PropType, TypeDescriptor};
pub use error::PropTypeError;
pub use generate::default::generate_value_for_type;
pub use generate::random::{generate_random_value_for_type, RandomGenerator, RandomOptions};
pub use generate::GenerateConfig;
pub use infer::{infer_type, infer_types_for_component, TypeSource};
pub use prop_types::PropTypes;
pub use registry::{RegistryEntry, TypeRegistry};
pub use validate::{invalid_props, value_satisfies_descriptor, value_satisfies_type};
pub use validator::{CheckContext, Props, Validator, ValidatorId};
pub use value::{Callback, ClassRef, PropValue};
