//! `prop-sandbox-store` - synchronous state for the fixture sandbox.
//!
//! Loading component lists, component modules and fixture files is left to
//! the host. Once a load resolves, the host dispatches the matching
//! [`Action`] and the [`Store`] folds it into [`SandboxState`]. Editors
//! report edits as [`Action::UpdateFixture`] with a cursor into the
//! selected component's fixture instances.
//!
//! ```
//! use std::sync::Arc;
//! use prop_sandbox_store::{Action, Fixtures, Store};
//! use prop_sandbox_types::{Component, PropTypes, TypeRegistry};
//! use serde_json::json;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let pt = PropTypes::patched(&registry);
//! let mut store = Store::new(registry);
//!
//! store.dispatch(Action::SelectComponent { key: "spinner.jsx".into() }).unwrap();
//! store.dispatch(Action::ComponentLoaded {
//!     key: "spinner.jsx".into(),
//!     component: Arc::new(Component::new("Spinner").prop("a", pt.string())),
//! }).unwrap();
//! store.dispatch(Action::FixturesLoaded {
//!     key: "spinner.jsx".into(),
//!     fixtures: Fixtures::from_json(json!({"instances": [{"a": 1}]})).unwrap(),
//! }).unwrap();
//! store.dispatch(Action::UpdateFixture {
//!     cursor: vec![0usize.into(), "a".into()],
//!     value: 2.into(),
//! }).unwrap();
//!
//! let fixtures = store.state().fixtures().unwrap();
//! assert_eq!(fixtures.to_json(), json!({"instances": [{"a": 2}]}));
//! ```

pub mod action;
pub mod editor;
pub mod error;
pub mod state;
pub mod store;

pub use action::Action;
pub use editor::EditorStrategy;
pub use error::StoreError;
pub use state::{ComponentEntry, Fixtures, SandboxState, SelectedComponent};
pub use store::Store;
