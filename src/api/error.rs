//! API Error Types

use thiserror::Error;

/// Failure modes of a backend request.
///
/// `Unauthorized` means the backend explicitly rejected the session token;
/// callers must discard the stored session and fall back to the login
/// screen. Everything else is `Transport`: the session is preserved and
/// retry is a manual user action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("session rejected by backend")]
    Unauthorized,

    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            FetchError::Unauthorized
        } else {
            FetchError::Transport(format!("HTTP {}", status))
        }
    }

    /// Wrap a network-level failure (DNS, connection refused, aborted fetch).
    pub fn network(err: impl std::fmt::Display) -> Self {
        FetchError::Transport(format!("Network error: {}", err))
    }

    /// Wrap a response body that did not parse as the expected JSON shape.
    pub fn parse(err: impl std::fmt::Display) -> Self {
        FetchError::Transport(format!("Parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized() {
        assert_eq!(FetchError::from_status(401), FetchError::Unauthorized);
    }

    #[test]
    fn test_other_statuses_are_transport() {
        assert_eq!(
            FetchError::from_status(500),
            FetchError::Transport("HTTP 500".to_string())
        );
        assert_eq!(
            FetchError::from_status(404),
            FetchError::Transport("HTTP 404".to_string())
        );
        // 403 is a policy rejection, not a session rejection
        assert_eq!(
            FetchError::from_status(403),
            FetchError::Transport("HTTP 403".to_string())
        );
    }
}
