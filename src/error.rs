//! Error type shared by every service operation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0}s")]
    Timeout(u32),

    /// Non-2xx answer from a backend
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Sign-in answered with anything but 200
    #[error("{message}")]
    LoginRejected { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("not signed in")]
    NotAuthenticated,
}

impl AppError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_login_displays_server_message() {
        let err = AppError::LoginRejected {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Bad credentials");
    }

    #[test]
    fn http_error_carries_status() {
        let err = AppError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }
}
