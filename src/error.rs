//! Error types shared by the REST wrappers, navigation glue and state
//! containers.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` describes what went wrong on the wire. `ClientError` is the
//! user-facing taxonomy: state containers convert wire failures into it after
//! logging and toasting, so callers can still react to the outcome.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the failure, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("navigation not available outside the browser")]
    Unavailable,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("browser rejected navigation: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("unauthorized")]
    Unauthorized,
    #[error("authorization url is empty")]
    MissingRedirectUrl,
    #[error("code exchange rejected: {0}")]
    CodeExchange(ApiError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

impl ClientError {
    /// Whether the failure was already surfaced to the user where it happened.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::MissingRedirectUrl | Self::CodeExchange(_))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
