//! Service context - dependency container for services
//!
//! Holds the repositories every service reads and writes through. The
//! process entry point builds one context and hands out references; services
//! keep no state of their own between calls.

use std::sync::Arc;

use social_common::AppConfig;
use social_core::traits::{
    FollowRepository, FriendRequestRepository, FriendshipRepository, UserRepository,
};
use social_db::{
    create_pool, run_migrations_from, DatabaseConfig, MemoryStore, PgFollowRepository,
    PgFriendRequestRepository, PgFriendshipRepository, PgPool, PgUserRepository,
};
use tracing::info;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    friend_request_repo: Arc<dyn FriendRequestRepository>,
    friendship_repo: Arc<dyn FriendshipRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        friend_request_repo: Arc<dyn FriendRequestRepository>,
        friendship_repo: Arc<dyn FriendshipRepository>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            friend_request_repo,
            friendship_repo,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgFollowRepository::new(pool.clone())),
            Arc::new(PgFriendRequestRepository::new(pool.clone())),
            Arc::new(PgFriendshipRepository::new(pool)),
        )
    }

    /// Context backed by a single in-process store
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Context backed by an existing in-process store
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }

    /// Connect to the configured database, apply migrations and build a context
    pub async fn connect(config: &AppConfig) -> ServiceResult<Self> {
        let db_config = DatabaseConfig::from(&config.database);
        let pool = create_pool(&db_config)
            .await
            .map_err(|e| ServiceError::internal(format!("database connection failed: {e}")))?;

        run_migrations_from(&pool, &db_config.migrations_dir)
            .await
            .map_err(|e| ServiceError::internal(format!("database migration failed: {e}")))?;

        info!(app = %config.app.name, "Service context ready");
        Ok(Self::postgres(pool))
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the follow edge repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the friend request repository
    pub fn friend_request_repo(&self) -> &dyn FriendRequestRepository {
        self.friend_request_repo.as_ref()
    }

    /// Get the friendship repository
    pub fn friendship_repo(&self) -> &dyn FriendshipRepository {
        self.friendship_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    friend_request_repo: Option<Arc<dyn FriendRequestRepository>>,
    friendship_repo: Option<Arc<dyn FriendshipRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn friend_request_repo(mut self, repo: Arc<dyn FriendRequestRepository>) -> Self {
        self.friend_request_repo = Some(repo);
        self
    }

    pub fn friendship_repo(mut self, repo: Arc<dyn FriendshipRepository>) -> Self {
        self.friendship_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::internal("follow_repo is required"))?,
            self.friend_request_repo
                .ok_or_else(|| ServiceError::internal("friend_request_repo is required"))?,
            self.friendship_repo
                .ok_or_else(|| ServiceError::internal("friendship_repo is required"))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_every_repository() {
        let store = Arc::new(MemoryStore::new());
        let err = ServiceContextBuilder::new()
            .user_repo(store.clone())
            .follow_repo(store.clone())
            .friendship_repo(store)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Internal error: friend_request_repo is required");
    }

    #[test]
    fn test_builder_with_shared_store() {
        let store = Arc::new(MemoryStore::new());
        let ctx = ServiceContextBuilder::new()
            .user_repo(store.clone())
            .follow_repo(store.clone())
            .friend_request_repo(store.clone())
            .friendship_repo(store)
            .build();
        assert!(ctx.is_ok());
    }
}
