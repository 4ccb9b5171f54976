use prop_sandbox_cursor::CursorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no component is selected")]
    NoSelection,
    #[error("fixtures for `{key}` have not loaded")]
    FixturesNotLoaded { key: String },
    #[error("fixture cursor must address at least one instance")]
    EmptyCursor,
    #[error("invalid fixture cursor: {0}")]
    Cursor(#[from] CursorError),
    #[error("malformed fixtures: {0}")]
    Fixtures(#[from] serde_json::Error),
}
