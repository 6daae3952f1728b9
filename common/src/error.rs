use thiserror::Error;

/// Every way a client operation can fail. All variants render as a
/// displayable message; the view layer shows them as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A required local input was missing. Raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-2xx status. Carries the provider's
    /// message when the body had one, else the status text.
    #[error("server error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// No response arrived at all (connectivity, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body matched none of the accepted schemas.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// True exactly for a provider-reported 401. A 401 on any protected
    /// call invalidates the stored credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Remote { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_remote_401_counts_as_unauthorized() {
        let unauthorized = ApiError::Remote {
            status: 401,
            message: "invalid token".to_string(),
        };
        assert!(unauthorized.is_unauthorized());

        let forbidden = ApiError::Remote {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
        assert!(!ApiError::Validation("email is required".to_string()).is_unauthorized());
    }

    #[test]
    fn messages_are_displayable() {
        let err = ApiError::Remote {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "server error (500): boom");
        assert_eq!(
            ApiError::Validation("email is required".to_string()).to_string(),
            "email is required"
        );
    }
}
