//! Error taxonomy for portal client operations.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` is what the session client returns. Callers that show errors to
//! people go through [`ApiError::user_message`], which always yields one
//! readable sentence instead of raw transport output. `StateError` marks
//! programming mistakes such as a guard rendered outside the app root.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when neither the server nor the transport supplied a usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Server {
        status: u16,
        /// JSON `message` field from the response body, if present.
        message: Option<String>,
    },
    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Single normalized message suitable for inline display.
    ///
    /// Prefers the server-supplied message, then transport error text, then
    /// [`GENERIC_ERROR_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        let candidate = match self {
            Self::Server { message, .. } => message.as_deref(),
            Self::Network(text) => Some(text.as_str()),
            Self::Decode(_) => None,
        };
        match candidate.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_owned(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }

    /// HTTP status for server errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Misuse of client state plumbing. These are bugs, not runtime conditions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("{0} was used outside of its provider; render it beneath `App`")]
    MissingContext(&'static str),
}
