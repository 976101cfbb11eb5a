//! PostgreSQL implementation of FriendshipRepository

use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};
use tracing::{debug, instrument, warn};

use social_core::entities::{
    Capabilities, FollowStatus, FriendLists, FriendRequest, FriendRequestStatus, UserSummary,
};
use social_core::error::DomainError;
use social_core::traits::{FriendshipRepository, RepoResult};
use social_core::value_objects::Id;

use crate::models::{FriendRequestModel, UserSummaryModel};

use super::error::{is_serialization_failure, map_db_error, request_not_found};
use super::follow::upsert_follow_row;

/// Failure inside the confirmation transaction
enum ConfirmError {
    /// A precondition failed on the locked row
    Rejected(DomainError),
    /// The database aborted a statement
    Db(SqlxError),
}

impl From<SqlxError> for ConfirmError {
    fn from(e: SqlxError) -> Self {
        Self::Db(e)
    }
}

impl From<DomainError> for ConfirmError {
    fn from(e: DomainError) -> Self {
        Self::Rejected(e)
    }
}

/// PostgreSQL implementation of FriendshipRepository
#[derive(Clone)]
pub struct PgFriendshipRepository {
    pool: PgPool,
}

impl PgFriendshipRepository {
    /// Create a new PgFriendshipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn confirm_in_transaction(
        &self,
        request_id: Id,
        receiver_id: Id,
        capabilities: Capabilities,
    ) -> Result<FriendRequest, ConfirmError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        // A concurrent confirmation blocks here and is aborted once the winner commits
        let current = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, chat_enabled, video_enabled,
                   feed_enabled, created_at, updated_at
            FROM friend_requests
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(request_id.into_inner())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| request_not_found(request_id))?;

        let current = FriendRequest::try_from(current)?;
        if current.receiver_id != receiver_id {
            return Err(DomainError::Unauthorized.into());
        }
        if !current.is_pending() {
            return Err(DomainError::RequestNotPending.into());
        }

        let accepted = sqlx::query_as::<_, FriendRequestModel>(
            r"
            UPDATE friend_requests
            SET status = 'accepted',
                chat_enabled = $2,
                video_enabled = $3,
                feed_enabled = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, sender_id, receiver_id, status, chat_enabled, video_enabled,
                      feed_enabled, created_at, updated_at
            ",
        )
        .bind(request_id.into_inner())
        .bind(capabilities.chat_enabled)
        .bind(capabilities.video_enabled)
        .bind(capabilities.feed_enabled)
        .fetch_one(&mut *tx)
        .await?;

        let sender_id = current.sender_id;
        upsert_follow_row(&mut *tx, sender_id, receiver_id, FollowStatus::Accepted).await?;
        upsert_follow_row(&mut *tx, receiver_id, sender_id, FollowStatus::Accepted).await?;

        sqlx::query(
            r"
            INSERT INTO friends (user_id, friend_id)
            VALUES ($1, $2), ($2, $1)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(%request_id, %sender_id, %receiver_id, "Friendship committed");
        Ok(FriendRequest::try_from(accepted)?)
    }

    /// Decide what a transaction aborted by a concurrent writer reports.
    ///
    /// If the request is no longer pending another confirmation won. Otherwise
    /// the conflict came from an unrelated row and surfaces as a store error.
    async fn resolve_conflict(&self, request_id: Id, cause: SqlxError) -> DomainError {
        let status = sqlx::query_scalar::<_, String>(
            "SELECT status FROM friend_requests WHERE id = $1",
        )
        .bind(request_id.into_inner())
        .fetch_optional(&self.pool)
        .await;

        match status {
            Ok(Some(status)) if status != FriendRequestStatus::Pending.as_str() => {
                warn!(%request_id, "Lost a concurrent friend request confirmation");
                DomainError::RequestNotPending
            }
            Ok(None) => request_not_found(request_id),
            Ok(Some(_)) => map_db_error(cause),
            Err(e) => map_db_error(e),
        }
    }
}

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    #[instrument(skip(self))]
    async fn find_friend_lists(&self, user_id: Id) -> RepoResult<FriendLists> {
        let friends = sqlx::query_as::<_, UserSummaryModel>(
            r"
            SELECT u.id, u.username, u.profile_picture, u.user_code
            FROM friends f
            INNER JOIN users u ON u.id = f.friend_id
            WHERE f.user_id = $1
            ORDER BY u.id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let friend_of = sqlx::query_as::<_, UserSummaryModel>(
            r"
            SELECT u.id, u.username, u.profile_picture, u.user_code
            FROM friends f
            INNER JOIN users u ON u.id = f.user_id
            WHERE f.friend_id = $1
            ORDER BY u.id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(FriendLists::new(
            friends.into_iter().map(UserSummary::from).collect(),
            friend_of.into_iter().map(UserSummary::from).collect(),
        ))
    }

    #[instrument(skip(self))]
    async fn confirm_friendship(
        &self,
        request_id: Id,
        receiver_id: Id,
        capabilities: Capabilities,
    ) -> RepoResult<FriendRequest> {
        match self
            .confirm_in_transaction(request_id, receiver_id, capabilities)
            .await
        {
            Ok(accepted) => Ok(accepted),
            Err(ConfirmError::Rejected(e)) => Err(e),
            Err(ConfirmError::Db(e)) if is_serialization_failure(&e) => {
                Err(self.resolve_conflict(request_id, e).await)
            }
            Err(ConfirmError::Db(e)) => Err(map_db_error(e)),
        }
    }
}
