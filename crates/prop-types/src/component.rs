use indexmap::IndexMap;

use crate::validator::Validator;

/// A previewable component as far as the sandbox cares: a display name and
/// its declared prop validators.
#[derive(Debug, Clone, Default)]
pub struct Component {
    pub display_name: String,
    pub prop_types: IndexMap<String, Validator>,
}

impl Component {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            prop_types: IndexMap::new(),
        }
    }

    pub fn prop(mut self, name: impl Into<String>, validator: Validator) -> Self {
        self.prop_types.insert(name.into(), validator);
        self
    }
}
