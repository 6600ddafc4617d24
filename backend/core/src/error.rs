use thiserror::Error;

/// Reasons a uniqueId could not be turned into a room id.
///
/// Shared by every resolution strategy, so callers can handle a failed
/// lookup without knowing which resolver produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The platform reported the handle has no live-capable account.
    #[error("user not found ({unique_id}): {message}")]
    UserNotFound { unique_id: String, message: String },

    /// The response did not carry a room id where one was expected.
    #[error("failed to parse room id: {0}")]
    ParseFailure(String),
}

impl ResolutionError {
    /// The offending handle, for `UserNotFound`.
    pub fn unique_id(&self) -> Option<&str> {
        match self {
            Self::UserNotFound { unique_id, .. } => Some(unique_id),
            Self::ParseFailure(_) => None,
        }
    }
}

/// Failures raised by an `HttpClient` implementation.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Top-level error type for liveroom.
#[derive(Debug, Error)]
pub enum LiveError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Http(#[from] HttpError),
}

impl LiveError {
    pub fn as_resolution(&self) -> Option<&ResolutionError> {
        match self {
            Self::Resolution(e) => Some(e),
            Self::Http(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_errors_convert_into_live_error() {
        let err: LiveError = ResolutionError::ParseFailure("missing".into()).into();
        assert!(matches!(
            err.as_resolution(),
            Some(ResolutionError::ParseFailure(_))
        ));
    }

    #[test]
    fn user_not_found_exposes_unique_id() {
        let err = ResolutionError::UserNotFound {
            unique_id: "ghost".into(),
            message: "no live account".into(),
        };
        assert_eq!(err.unique_id(), Some("ghost"));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn live_error_is_either_resolution_or_transport() {
        let errors: Vec<LiveError> = vec![
            ResolutionError::ParseFailure("missing".into()).into(),
            HttpError::Transport("connection reset".into()).into(),
        ];
        for err in errors {
            // Exhaustive on purpose: a new variant must be classified here.
            let is_resolution = match &err {
                LiveError::Resolution(_) => true,
                LiveError::Http(_) => false,
            };
            assert_eq!(is_resolution, err.as_resolution().is_some());
        }
    }

    #[test]
    fn http_errors_are_not_resolution_errors() {
        let err: LiveError = HttpError::Timeout("10s elapsed".into()).into();
        assert!(err.as_resolution().is_none());
    }
}
