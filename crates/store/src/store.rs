use std::sync::Arc;

use prop_sandbox_cursor::{self as cursor, Cursor};
use prop_sandbox_types::{infer_types_for_component, PropValue, TypeRegistry};
use tracing::debug;

use crate::action::Action;
use crate::error::StoreError;
use crate::state::{SandboxState, SelectedComponent};

/// Owns the sandbox state and the registry used to infer prop types of
/// loaded components.
#[derive(Debug)]
pub struct Store {
    registry: Arc<TypeRegistry>,
    state: SandboxState,
}

impl Store {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            state: SandboxState::default(),
        }
    }

    pub fn state(&self) -> &SandboxState {
        &self.state
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Applies `action`. On error the state is left as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        debug!(action = action.name(), "dispatch");
        match action {
            Action::ComponentListLoaded { components } => {
                debug!(count = components.len(), "component list loaded");
                self.state.component_list = Some(components);
            }
            Action::SelectComponent { key } => {
                self.state.selected_component = Some(SelectedComponent::new(key));
            }
            Action::ComponentLoaded { key, component } => {
                let Some(selected) = self.state.selection_mut(&key) else {
                    debug!(key = %key, "Ignoring stale component load");
                    return Ok(());
                };
                let types = infer_types_for_component(&self.registry, &component);
                debug!(key = %key, props = types.len(), "component loaded");
                selected.types = Some(types);
                selected.reference = Some(component);
            }
            Action::FixturesLoaded { key, fixtures } => {
                let Some(selected) = self.state.selection_mut(&key) else {
                    debug!(key = %key, "Ignoring stale fixtures load");
                    return Ok(());
                };
                debug!(key = %key, instances = fixtures.instances.len(), "fixtures loaded");
                selected.fixtures = Some(fixtures);
            }
            Action::UpdateFixture { cursor, value } => self.update_fixture(&cursor, value)?,
        }
        Ok(())
    }

    fn update_fixture(&mut self, at: &Cursor, value: PropValue) -> Result<(), StoreError> {
        if at.is_empty() {
            return Err(StoreError::EmptyCursor);
        }
        let selected = self
            .state
            .selected_component
            .as_mut()
            .ok_or(StoreError::NoSelection)?;
        let fixtures = selected
            .fixtures
            .as_mut()
            .ok_or_else(|| StoreError::FixturesNotLoaded {
                key: selected.key.clone(),
            })?;
        let mut instances = PropValue::Array(fixtures.instances.clone());
        cursor::set(&mut instances, at, value)?;
        // A non-empty cursor only rewrites a descendant of the list.
        if let PropValue::Array(items) = instances {
            fixtures.instances = items;
        }
        debug!(cursor = %cursor::format_cursor(at), "fixture updated");
        Ok(())
    }
}
