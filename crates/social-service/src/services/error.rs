//! Service layer error type
//!
//! A service call fails because a relationship rule said no, because the
//! caller's input did not validate, or because the wiring underneath it
//! (pool, migrations, missing repository) broke. Turning a `ServiceError`
//! into an `AppError` decides what the caller gets to see.

use social_common::AppError;
use social_core::DomainError;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A relationship rule rejected the operation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request DTO failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Infrastructure failure outside the repositories
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The wrapped domain error, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }

    /// Stable error code, identical to the one the caller receives
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => Self::Domain(e),
            ServiceError::Validation(msg) => Self::Validation(msg),
            ServiceError::Internal(msg) => Self::internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use social_common::GENERIC_FAILURE_MESSAGE;
    use social_core::Id;

    #[test]
    fn test_codes_match_app_error() {
        let errors = [
            ServiceError::from(DomainError::FollowNotFound(Id::new(1))),
            ServiceError::from(DomainError::RequestNotPending),
            ServiceError::Validation("user_code: too long".to_string()),
            ServiceError::internal("pool closed"),
        ];
        for err in errors {
            let code = err.error_code();
            assert_eq!(AppError::from(err).error_code(), code);
        }
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err = ServiceError::from(DomainError::SelfFollow);
        assert_eq!(err.to_string(), "You cannot follow yourself");
        assert!(matches!(err.as_domain(), Some(DomainError::SelfFollow)));
        assert!(ServiceError::internal("x").as_domain().is_none());
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(DomainError::NotFollowing).into();
        assert_eq!(app_err.status_code(), 400);
        assert_eq!(app_err.user_message(), "You are not following this user.");

        let app_err: AppError = ServiceError::internal("pool closed").into();
        assert_eq!(app_err.status_code(), 500);
        assert_eq!(app_err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
