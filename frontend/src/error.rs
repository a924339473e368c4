use crate::catalog::state::Operation;
use crate::messages;
use thiserror::Error;

/// Failure talking to the remote video store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("could not decode response: {0}")]
    Parse(String),
}

fn status_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Text shown when adding a video fails.
    pub fn add_failure_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => messages::server_error(message),
            _ => messages::CONNECTION_FAILED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("video url is empty")]
    EmptyUrl,
    #[error("cancelled by user")]
    Declined,
    #[error("{0:?} is already in progress")]
    InFlight(Operation),
    #[error("panel is read-only")]
    ReadOnly,
    #[error(transparent)]
    Api(#[from] ApiError),
}
