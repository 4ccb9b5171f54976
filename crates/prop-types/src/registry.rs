//! Validator registry.
//!
//! Maps validator identities back to how they were constructed. The
//! registry is an ordinary value: create one at startup, patch a
//! [`PropTypes`](crate::PropTypes) library with it, and pass it to
//! inference. Registration only ever adds entries.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

use crate::descriptor::{Kind, PropKind};
use crate::validator::{Validator, ValidatorId};

/// How a registered validator was built.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub construction: PropKind<Validator>,
    pub required: bool,
}

impl RegistryEntry {
    pub fn kind(&self) -> Kind {
        self.construction.kind()
    }
}

#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: RwLock<HashMap<ValidatorId, RegistryEntry>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `validator` and its required counterpart as built by
    /// `construction`. Registering an identity twice keeps the first entry.
    pub fn register(&self, construction: PropKind<Validator>, validator: &Validator) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(&validator.id()) {
            return;
        }
        trace!(
            id = %validator.id(),
            kind = %construction.kind(),
            "registering prop type"
        );
        if let Some(required) = validator.required_variant() {
            entries.insert(
                required.id(),
                RegistryEntry {
                    construction: construction.clone(),
                    required: true,
                },
            );
        }
        entries.insert(
            validator.id(),
            RegistryEntry {
                construction,
                required: validator.required(),
            },
        );
    }

    pub fn lookup(&self, validator: &Validator) -> Option<RegistryEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&validator.id())
            .cloned()
    }

    /// Number of registered validator identities.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
