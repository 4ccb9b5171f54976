use std::sync::Arc;

use indexmap::IndexMap;
use prop_sandbox_cursor::PathStep;
use prop_sandbox_types::{
    generate_value_for_type, invalid_props, Callback, Component, GenerateConfig, PropTypeError, PropValue,
    Props, TypeDescriptor,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;

/// One previewable component: the key it is loaded by and its display
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub key: String,
    pub name: String,
}

impl ComponentEntry {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Sample prop sets for one component. Each instance is rendered as its
/// own preview. Other top-level keys of the fixture file are carried
/// along untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub instances: Vec<PropValue>,
    #[serde(flatten)]
    pub extra: IndexMap<String, PropValue>,
}

impl Fixtures {
    pub fn new(instances: Vec<PropValue>) -> Self {
        Self {
            instances,
            extra: IndexMap::new(),
        }
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self, StoreError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        out.insert(
            "instances".to_string(),
            self.instances.iter().map(PropValue::to_json).collect(),
        );
        for (key, value) in &self.extra {
            out.insert(key.clone(), value.to_json());
        }
        serde_json::Value::Object(out)
    }

    /// Props of instance `index` with every declared prop it lacks filled
    /// in by [`generate_value_for_type`]. Stored props keep their order
    /// and come first. Generation paths start with `[index, prop]`, which
    /// is also where an edit of that prop would point.
    pub fn instance_props_with_defaults(
        &self,
        index: usize,
        types: &IndexMap<String, TypeDescriptor>,
        config: &GenerateConfig,
    ) -> Option<Props> {
        let mut props = match self.instances.get(index)? {
            PropValue::Object(map) => map.clone(),
            _ => Props::new(),
        };
        for (name, descriptor) in types {
            if props.contains_key(name) {
                continue;
            }
            let path: [PathStep; 2] = [index.into(), name.as_str().into()];
            props.insert(name.clone(), generate_value_for_type(descriptor, &path, config));
        }
        Some(props)
    }
}

fn logging_callback(prop: &str) -> Callback {
    let prop = prop.to_string();
    Callback::new(move |args| {
        info!(prop = %prop, ?args, "callback invoked");
        PropValue::Null
    })
}

/// The component under inspection. Fields fill in as their loads resolve.
#[derive(Debug, Clone)]
pub struct SelectedComponent {
    pub key: String,
    pub reference: Option<Arc<Component>>,
    pub types: Option<IndexMap<String, TypeDescriptor>>,
    pub fixtures: Option<Fixtures>,
}

impl SelectedComponent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reference: None,
            types: None,
            fixtures: None,
        }
    }

    /// Props instance `index` is previewed with, once the component and
    /// its fixtures have both loaded: backfilled defaults, then every prop
    /// named in `callbacks_to_log` replaced by a callback that logs its
    /// arguments.
    pub fn instance_props(
        &self,
        index: usize,
        config: &GenerateConfig,
        callbacks_to_log: &[String],
    ) -> Option<Props> {
        let types = self.types.as_ref()?;
        let mut props = self
            .fixtures
            .as_ref()?
            .instance_props_with_defaults(index, types, config)?;
        for prop in callbacks_to_log {
            props.insert(prop.clone(), PropValue::Func(logging_callback(prop)));
        }
        Some(props)
    }

    /// Validation errors of instance `index`, checked against the same
    /// props [`instance_props`](Self::instance_props) returns. A preview
    /// shows these in place of the component when any are present.
    pub fn instance_errors(
        &self,
        index: usize,
        config: &GenerateConfig,
        callbacks_to_log: &[String],
    ) -> Option<Vec<PropTypeError>> {
        let component = self.reference.as_ref()?;
        let props = self.instance_props(index, config, callbacks_to_log)?;
        Some(invalid_props(component, &props))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SandboxState {
    pub component_list: Option<Vec<ComponentEntry>>,
    pub selected_component: Option<SelectedComponent>,
}

impl SandboxState {
    pub fn fixtures(&self) -> Option<&Fixtures> {
        self.selected_component.as_ref()?.fixtures.as_ref()
    }

    pub fn types(&self) -> Option<&IndexMap<String, TypeDescriptor>> {
        self.selected_component.as_ref()?.types.as_ref()
    }

    /// The selection `key` refers to, if it is still the current one.
    pub(crate) fn selection_mut(&mut self, key: &str) -> Option<&mut SelectedComponent> {
        self.selected_component
            .as_mut()
            .filter(|selected| selected.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prop_sandbox_types::T;
    use serde_json::json;

    fn types() -> IndexMap<String, TypeDescriptor> {
        IndexMap::from([
            ("a".to_string(), T.string()),
            ("b".to_string(), T.number().required()),
            ("c".to_string(), T.array_of(T.bool().required()).required()),
        ])
    }

    #[test]
    fn parses_instances() {
        let fixtures = Fixtures::from_json(json!({"instances": [{"a": 1}, {}]})).unwrap();
        assert_eq!(fixtures.instances.len(), 2);
        assert_eq!(fixtures.to_json(), json!({"instances": [{"a": 1}, {}]}));
        assert!(fixtures.extra.is_empty());
        assert_eq!(Fixtures::from_json(json!({})).unwrap(), Fixtures::default());
        assert!(Fixtures::from_json(json!({"instances": 3})).is_err());
    }

    #[test]
    fn backfills_missing_props_only() {
        let fixtures = Fixtures::from_json(json!({"instances": [{"b": 5}]})).unwrap();
        let props = fixtures
            .instance_props_with_defaults(0, &types(), &GenerateConfig::default())
            .unwrap();
        assert_eq!(
            PropValue::Object(props).to_json(),
            json!({"b": 5, "a": null, "c": [false]})
        );
        assert!(fixtures
            .instance_props_with_defaults(1, &types(), &GenerateConfig::default())
            .is_none());
    }

    #[test]
    fn backfill_honours_overrides_at_instance_paths() {
        let fixtures = Fixtures::new(vec![PropValue::from(json!({}))]);
        let config = GenerateConfig::default().with_override(vec![0usize.into(), "a".into()], "hi");
        let props = fixtures
            .instance_props_with_defaults(0, &types(), &config)
            .unwrap();
        assert_eq!(props["a"], PropValue::from("hi"));
    }

    #[test]
    fn non_object_instance_is_treated_as_empty() {
        let fixtures = Fixtures::new(vec![PropValue::Null]);
        let props = fixtures
            .instance_props_with_defaults(0, &types(), &GenerateConfig::default())
            .unwrap();
        assert_eq!(props.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn keeps_unknown_top_level_keys() {
        let file = json!({"instances": [{"a": 1}], "callbacksToLog": ["onClick"], "meta": {"v": 2}});
        let fixtures = Fixtures::from_json(file.clone()).unwrap();
        assert_eq!(fixtures.extra.len(), 2);
        assert_eq!(fixtures.to_json(), file);
    }
}
