//! Application error types
//!
//! Unified error handling for whatever surface sits on top of the services.
//! Every error carries a status code, a stable error code and a message that
//! is safe to show to the caller. Storage and internal failures collapse to
//! one generic message and are logged instead of exposed.

use social_core::DomainError;
use serde::Serialize;

/// Message shown for every failure the caller cannot act on
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed caller input rejected before reaching the domain
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Caller-facing message. Infrastructure details never appear here.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            Self::Domain(e) => domain_message(e).to_string(),
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

fn domain_message(err: &DomainError) -> &str {
    match err {
        DomainError::UserNotFound(_) => "User not found.",
        DomainError::FollowNotFound(_) => "Follow request not found.",
        DomainError::RequestNotFound(_) => "Friend request not found.",
        DomainError::SelfFollow => "You cannot follow yourself.",
        DomainError::NotFollowing => "You are not following this user.",
        DomainError::ValidationError(msg) => msg.as_str(),
        DomainError::Unauthorized => "You are not authorized to act on this request.",
        DomainError::AlreadyFollowing => "You are already following this user.",
        DomainError::RequestAlreadyPending => {
            "You have already sent a follow request to this user."
        }
        DomainError::DuplicateRequest => "You have already sent a friend request to this user.",
        DomainError::NotPending => "Follow request is not pending.",
        DomainError::RequestNotPending => "Friend request is not pending.",
        DomainError::Store(_) | DomainError::InternalError(_) => GENERIC_FAILURE_MESSAGE,
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        if err.is_server_error() {
            tracing::error!(error = %err, code = err.error_code(), "Request failed");
        }

        Self {
            code: err.error_code().to_string(),
            message: err.user_message(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}
