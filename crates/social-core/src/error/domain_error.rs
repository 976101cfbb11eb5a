//! Domain errors - the closed set of relationship failures

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Follow request not found: {0}")]
    FollowNotFound(Id),

    #[error("Friend request not found: {0}")]
    RequestNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("You cannot follow yourself")]
    SelfFollow,

    #[error("You are not following this user")]
    NotFollowing,

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not authorized to act on this request")]
    Unauthorized,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("Follow request already pending")]
    RequestAlreadyPending,

    #[error("Friend request already exists")]
    DuplicateRequest,

    // =========================================================================
    // State Transition Errors
    // =========================================================================
    #[error("Follow request is not pending")]
    NotPending,

    #[error("Friend request is not pending")]
    RequestNotPending,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::FollowNotFound(_) => "UNKNOWN_FOLLOW",
            Self::RequestNotFound(_) => "UNKNOWN_FRIEND_REQUEST",

            // Validation
            Self::SelfFollow => "SELF_FOLLOW",
            Self::NotFollowing => "NOT_FOLLOWING",
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authorization
            Self::Unauthorized => "UNAUTHORIZED",

            // Conflict
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",
            Self::RequestAlreadyPending => "REQUEST_ALREADY_PENDING",
            Self::DuplicateRequest => "DUPLICATE_REQUEST",

            // State transitions
            Self::NotPending => "NOT_PENDING",
            Self::RequestNotPending => "REQUEST_NOT_PENDING",

            // Infrastructure
            Self::Store(_) => "STORE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::FollowNotFound(_) | Self::RequestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::SelfFollow | Self::NotFollowing | Self::ValidationError(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a conflict error (existing relation or wrong source state)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyFollowing
                | Self::RequestAlreadyPending
                | Self::DuplicateRequest
                | Self::NotPending
                | Self::RequestNotPending
        )
    }

    /// Check if this error originates below the domain (storage, bugs)
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Store(_) | Self::InternalError(_))
    }
}
