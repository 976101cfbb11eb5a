//! Test helpers for integration tests
//!
//! Provides the test environment wrapper and assertions on typed failures.

use std::fmt::Debug;

use anyhow::Result;
use social_common::{try_init_tracing_with_config, AppConfig, AppError, ErrorResponse, TracingConfig};
use social_core::User;
use social_service::{
    FollowService, FriendRequestService, RelationshipService, ServiceContext, ServiceResult,
};

use crate::fixtures::new_user;

/// Which store a test environment runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Memory,
}

/// Service context plus convenience accessors
pub struct TestEnv {
    pub ctx: ServiceContext,
    pub backend: Backend,
}

impl TestEnv {
    /// Start against PostgreSQL if `DATABASE_URL` is set, in memory otherwise
    pub async fn start() -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = try_init_tracing_with_config(TracingConfig::development());

        if std::env::var("DATABASE_URL").is_err() {
            return Ok(Self {
                ctx: ServiceContext::in_memory(),
                backend: Backend::Memory,
            });
        }

        let config = test_config()?;
        let ctx = ServiceContext::connect(&config).await?;
        Ok(Self {
            ctx,
            backend: Backend::Postgres,
        })
    }

    /// Register a fresh user
    pub async fn user(&self) -> Result<User> {
        Ok(self.ctx.user_repo().create(&new_user()).await?)
    }

    pub fn follows(&self) -> FollowService<'_> {
        FollowService::new(&self.ctx)
    }

    pub fn friends(&self) -> FriendRequestService<'_> {
        FriendRequestService::new(&self.ctx)
    }

    pub fn relationships(&self) -> RelationshipService<'_> {
        RelationshipService::new(&self.ctx)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Assert the call failed with the given error code, returning the caller-facing body
pub fn assert_error_code<T: Debug>(result: ServiceResult<T>, expected_code: &str) -> Result<ErrorResponse> {
    let err = match result {
        Ok(value) => anyhow::bail!("Expected error {}, got Ok({:?})", expected_code, value),
        Err(err) => err,
    };

    if err.error_code() != expected_code {
        anyhow::bail!("Expected error {}, got {}: {}", expected_code, err.error_code(), err);
    }

    Ok(ErrorResponse::from(AppError::from(err)))
}
