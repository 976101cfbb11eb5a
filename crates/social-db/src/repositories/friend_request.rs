//! PostgreSQL implementation of FriendRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::entities::FriendRequest;
use social_core::error::DomainError;
use social_core::traits::{FriendRequestRepository, FriendRequestWithSender, RepoResult};
use social_core::value_objects::Id;

use crate::mappers::request_with_sender;
use crate::models::{FriendRequestModel, FriendRequestWithSenderModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FriendRequestRepository
#[derive(Clone)]
pub struct PgFriendRequestRepository {
    pool: PgPool,
}

impl PgFriendRequestRepository {
    /// Create a new PgFriendRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendRequestRepository for PgFriendRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, chat_enabled, video_enabled,
                   feed_enabled, created_at, updated_at
            FROM friend_requests
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FriendRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_outstanding(
        &self,
        sender_id: Id,
        receiver_id: Id,
    ) -> RepoResult<Option<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, chat_enabled, video_enabled,
                   feed_enabled, created_at, updated_at
            FROM friend_requests
            WHERE sender_id = $1 AND receiver_id = $2
              AND status IN ('pending', 'accepted')
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FriendRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn accepted_between(&self, user_a: Id, user_b: Id) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r"
            SELECT EXISTS(
                SELECT 1 FROM friend_requests
                WHERE status = 'accepted'
                  AND ((sender_id = $1 AND receiver_id = $2)
                    OR (sender_id = $2 AND receiver_id = $1))
            )
            ",
        )
        .bind(user_a.into_inner())
        .bind(user_b.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, sender_id: Id, receiver_id: Id) -> RepoResult<FriendRequest> {
        let model = sqlx::query_as::<_, FriendRequestModel>(
            r"
            INSERT INTO friend_requests (sender_id, receiver_id, status)
            VALUES ($1, $2, 'pending')
            RETURNING id, sender_id, receiver_id, status, chat_enabled, video_enabled,
                      feed_enabled, created_at, updated_at
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateRequest))?;

        FriendRequest::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_pending_for_receiver(
        &self,
        receiver_id: Id,
    ) -> RepoResult<Vec<FriendRequestWithSender>> {
        let rows = sqlx::query_as::<_, FriendRequestWithSenderModel>(
            r"
            SELECT fr.id, fr.sender_id, fr.receiver_id, fr.status, fr.chat_enabled,
                   fr.video_enabled, fr.feed_enabled, fr.created_at, fr.updated_at,
                   s.username AS sender_username,
                   s.profile_picture AS sender_profile_picture
            FROM friend_requests fr
            INNER JOIN users s ON s.id = fr.sender_id
            WHERE fr.receiver_id = $1 AND fr.status = 'pending'
            ORDER BY fr.id
            ",
        )
        .bind(receiver_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(request_with_sender).collect()
    }
}
