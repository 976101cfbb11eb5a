//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgExecutor, PgPool};
use tracing::instrument;

use social_core::entities::{FollowEdge, FollowStatus};
use social_core::error::DomainError;
use social_core::traits::{FollowRepository, FollowWithUser, RepoResult};
use social_core::value_objects::Id;

use crate::mappers::follow_with_user;
use crate::models::{FollowModel, FollowWithUserModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert the edge or move the existing one to `status`.
///
/// Shared with the friendship confirmation, which runs it inside its transaction
/// and needs the raw database error to detect serialization failures.
pub(crate) async fn upsert_follow_row<'e, E>(
    executor: E,
    follower_id: Id,
    following_id: Id,
    status: FollowStatus,
) -> Result<FollowModel, SqlxError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, FollowModel>(
        r"
        INSERT INTO follows (follower_id, following_id, status)
        VALUES ($1, $2, $3)
        ON CONFLICT (follower_id, following_id)
        DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()
        RETURNING id, follower_id, following_id, status, created_at, updated_at
        ",
    )
    .bind(follower_id.into_inner())
    .bind(following_id.into_inner())
    .bind(status.as_str())
    .fetch_one(executor)
    .await
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<FollowEdge>> {
        let result = sqlx::query_as::<_, FollowModel>(
            r"
            SELECT id, follower_id, following_id, status, created_at, updated_at
            FROM follows
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FollowEdge::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_pair(
        &self,
        follower_id: Id,
        following_id: Id,
    ) -> RepoResult<Option<FollowEdge>> {
        let result = sqlx::query_as::<_, FollowModel>(
            r"
            SELECT id, follower_id, following_id, status, created_at, updated_at
            FROM follows
            WHERE follower_id = $1 AND following_id = $2
            ",
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FollowEdge::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge> {
        let model = sqlx::query_as::<_, FollowModel>(
            r"
            INSERT INTO follows (follower_id, following_id, status)
            VALUES ($1, $2, $3)
            RETURNING id, follower_id, following_id, status, created_at, updated_at
            ",
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RequestAlreadyPending))?;

        FollowEdge::try_from(model)
    }

    #[instrument(skip(self))]
    async fn transition_status(
        &self,
        id: Id,
        from: FollowStatus,
        to: FollowStatus,
    ) -> RepoResult<Option<FollowEdge>> {
        let result = sqlx::query_as::<_, FollowModel>(
            r"
            UPDATE follows
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING id, follower_id, following_id, status, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .bind(from.as_str())
        .bind(to.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FollowEdge::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn upsert(
        &self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge> {
        let model = upsert_follow_row(&self.pool, follower_id, following_id, status)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::RequestAlreadyPending))?;

        FollowEdge::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete_by_pair(&self, follower_id: Id, following_id: Id) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM follows
            WHERE follower_id = $1 AND following_id = $2
            ",
        )
        .bind(follower_id.into_inner())
        .bind(following_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_incoming(
        &self,
        user_id: Id,
        status: FollowStatus,
    ) -> RepoResult<Vec<FollowWithUser>> {
        let rows = sqlx::query_as::<_, FollowWithUserModel>(
            r"
            SELECT f.id, f.follower_id, f.following_id, f.status, f.created_at, f.updated_at,
                   u.id AS user_id, u.username, u.profile_picture, u.user_code
            FROM follows f
            INNER JOIN users u ON u.id = f.follower_id
            WHERE f.following_id = $1 AND f.status = $2
            ORDER BY f.id
            ",
        )
        .bind(user_id.into_inner())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(follow_with_user).collect()
    }

    #[instrument(skip(self))]
    async fn find_outgoing(
        &self,
        user_id: Id,
        status: FollowStatus,
    ) -> RepoResult<Vec<FollowWithUser>> {
        let rows = sqlx::query_as::<_, FollowWithUserModel>(
            r"
            SELECT f.id, f.follower_id, f.following_id, f.status, f.created_at, f.updated_at,
                   u.id AS user_id, u.username, u.profile_picture, u.user_code
            FROM follows f
            INNER JOIN users u ON u.id = f.following_id
            WHERE f.follower_id = $1 AND f.status = $2
            ORDER BY f.id
            ",
        )
        .bind(user_id.into_inner())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(follow_with_user).collect()
    }
}
