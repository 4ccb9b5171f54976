use std::sync::Arc;

use prop_sandbox_cursor::Cursor;
use prop_sandbox_types::{Component, PropValue};

use crate::state::{ComponentEntry, Fixtures};

/// Everything that can change [`SandboxState`](crate::SandboxState).
///
/// The `*Loaded` actions carry the key they were requested for. A result
/// that arrives after another component was selected is dropped.
#[derive(Debug, Clone)]
pub enum Action {
    ComponentListLoaded {
        components: Vec<ComponentEntry>,
    },
    /// Starts a new selection. The reference, types and fixtures of the
    /// previous selection are discarded.
    SelectComponent {
        key: String,
    },
    ComponentLoaded {
        key: String,
        component: Arc<Component>,
    },
    FixturesLoaded {
        key: String,
        fixtures: Fixtures,
    },
    /// Point update of the selected fixtures. The cursor is relative to
    /// the instance list, so `[0, "a"]` is prop `a` of the first instance.
    UpdateFixture {
        cursor: Cursor,
        value: PropValue,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ComponentListLoaded { .. } => "component_list_loaded",
            Self::SelectComponent { .. } => "select_component",
            Self::ComponentLoaded { .. } => "component_loaded",
            Self::FixturesLoaded { .. } => "fixtures_loaded",
            Self::UpdateFixture { .. } => "update_fixture",
        }
    }
}
