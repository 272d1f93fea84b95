//! View-all navigation errors

/// Errors building or reading a view-all navigation payload.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The payload could not be encoded or decoded as JSON.
    #[error("invalid view-all payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The URL fragment is not valid base64.
    #[error("invalid view-all fragment: {0}")]
    Fragment(#[from] base64::DecodeError),

    /// The URL does not point at a one.app component fragment.
    #[error("not a view-all url: {0}")]
    NotViewAllUrl(String),
}
