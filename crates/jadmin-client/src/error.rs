//! Error taxonomy for the session and gateway layer.
//!
//! The gateway performs exactly one layer of normalization (status-code
//! interpretation) and otherwise re-throws: callers decide what to surface.
//! [`Error::Unauthenticated`] and [`Error::SessionExpired`] both carry the
//! forced-logout side effect with them, so a caller seeing either knows the
//! session is already gone.

use thiserror::Error;

/// Failure of an authenticated gateway call.
#[derive(Debug, Error)]
pub enum Error {
    /// No session existed when the call was issued; no network contact was
    /// made and the stale session state has been cleared.
    #[error("not authenticated")]
    Unauthenticated,

    /// The server rejected the credentials (HTTP 401); the session has been
    /// cleared.
    #[error("session expired")]
    SessionExpired,

    /// The server answered with a non-2xx, non-401 status.
    #[error("{message}")]
    Api {
        /// HTTP status code of the reply.
        status: u16,
        /// Server-supplied `message` field, or `HTTP <status>` when absent.
        message: String,
    },

    /// Network failure or a response body that could not be decoded.
    #[error("{0}")]
    Transport(String),
}

impl Error {
    /// HTTP status associated with the failure, when one exists.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::SessionExpired => Some(401),
            Self::Unauthenticated | Self::Transport(_) => None,
        }
    }

    /// Whether the failure already terminated the session as a side effect.
    #[must_use]
    pub const fn ended_session(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::SessionExpired)
    }
}

/// Failure of the credential probe performed at login.
///
/// The probe runs before a session exists, so none of its failures trigger
/// the forced-logout path.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The server rejected the candidate credentials.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The server answered the probe with an unexpected status.
    #[error("server error (status {0})")]
    Server(u16),

    /// The probe never reached the server.
    #[error("connection error: {0}")]
    Connection(String),
}
