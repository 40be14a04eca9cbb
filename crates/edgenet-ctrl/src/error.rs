use thiserror::Error;

use crate::stores::StoreError;

/// Engine-level error with an explicit client/server classification. The HTTP
/// layer maps variants to status codes; nothing is ever inferred from error
/// text.
#[derive(Debug, Error)]
pub enum CtrlError {
    /// Activation refused because a scenario is already active.
    #[error("scenario already active")]
    AlreadyActive,
    /// Operation requires an active scenario and none is.
    #[error("no scenario is active")]
    NoActiveScenario,
    /// Malformed or missing request payload, unknown event type.
    #[error("{0}")]
    BadRequest(String),
    /// Named scenario or node does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// Duplicate name on create.
    #[error("{0} already exists")]
    Conflict(String),
    /// Collaborator (store, model, watchdog) failure.
    #[error("{0}")]
    Internal(String),
}

impl CtrlError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        CtrlError::BadRequest(msg.into())
    }
}

impl From<StoreError> for CtrlError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => CtrlError::NotFound(what),
            StoreError::Conflict(what) => CtrlError::Conflict(what),
            StoreError::Backend(msg) => CtrlError::Internal(msg),
        }
    }
}
