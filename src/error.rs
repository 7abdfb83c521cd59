//! The client-visible error taxonomy for a change-calculation attempt.
//!
//! Three classes of failure exist on the wire path: local validation that
//! never reaches the network, transport failures where the service could not
//! be reached at all, and structured application errors returned by the
//! service with a non-2xx status. The remaining variants cover the edges of
//! the CLI rendition: an unreadable success body, a failed health probe
//! gating submission, and the persisted selection cache.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangeError {
    /// Local precondition failure. Never reaches the network; the user must
    /// correct the input.
    #[error("{message}")]
    Validation { message: String },

    /// The request could not reach the service at all.
    #[error(
        "cannot reach the coin-change service: {reason}. Check that the service is running and reachable at the configured base URL."
    )]
    Transport { reason: String },

    /// The service answered non-2xx with a structured error body; `message`
    /// is surfaced verbatim.
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The service answered 2xx but the body was not the expected shape.
    #[error("could not decode the service response: {reason}")]
    Decode { reason: String },

    /// A failed health probe blocking submission before any calculate
    /// request was sent.
    #[error("the coin-change service is unavailable: {reason}")]
    Disconnected { reason: String },

    /// The persisted denomination selection could not be read or written.
    #[error("selection cache error: {0}")]
    Selection(String),
}

impl ChangeError {
    pub fn validation(message: impl Into<String>) -> Self {
        ChangeError::Validation {
            message: message.into(),
        }
    }

    /// Classifies a reqwest failure into the transport class, keeping the
    /// connection-level cases terse and specific.
    pub fn transport(err: &reqwest::Error) -> Self {
        let reason = if err.is_connect() {
            "connection refused or blocked".to_string()
        } else if err.is_timeout() {
            "the request timed out".to_string()
        } else {
            err.to_string()
        };
        ChangeError::Transport { reason }
    }
}
