//! Follow service
//!
//! Directional follow edges and their status machine:
//! absent -> pending (send), pending -> accepted | rejected (target user),
//! accepted -> absent (unfollow), rejected -> pending (resend, same row).

use social_core::entities::{FollowEdge, FollowStatus};
use social_core::{DomainError, Id};
use tracing::{info, instrument, warn};

use crate::dto::{FollowEntryResponse, FollowResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ask to follow a user.
    ///
    /// A previously rejected edge is moved back to pending and returned with
    /// its original id.
    #[instrument(skip(self))]
    pub async fn send_follow_request(
        &self,
        follower_id: Id,
        following_id: Id,
    ) -> ServiceResult<FollowResponse> {
        if follower_id == following_id {
            return Err(DomainError::SelfFollow.into());
        }

        // Verify target exists
        self.ctx
            .user_repo()
            .find_by_id(following_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(following_id.to_string()))?;

        let repo = self.ctx.follow_repo();
        let edge = match repo.find_by_pair(follower_id, following_id).await? {
            Some(existing) if existing.status == FollowStatus::Rejected => {
                match repo
                    .transition_status(existing.id, FollowStatus::Rejected, FollowStatus::Pending)
                    .await?
                {
                    Some(edge) => edge,
                    // A concurrent resend or accept moved the edge first
                    None => {
                        let current = repo.find_by_pair(follower_id, following_id).await?;
                        return Err(existing_edge_error(current.map(|e| e.status)).into());
                    }
                }
            }
            Some(existing) => return Err(existing_edge_error(Some(existing.status)).into()),
            // A concurrent create for the same pair surfaces as RequestAlreadyPending
            None => repo.create(follower_id, following_id, FollowStatus::Pending).await?,
        };

        info!(
            edge_id = %edge.id,
            follower_id = %follower_id,
            following_id = %following_id,
            "Follow request sent"
        );

        Ok(FollowResponse::from(edge))
    }

    /// Accept a pending follow request addressed to `acting_user_id`
    #[instrument(skip(self))]
    pub async fn accept_follow_request(
        &self,
        edge_id: Id,
        acting_user_id: Id,
    ) -> ServiceResult<FollowResponse> {
        let edge = self
            .transition(edge_id, acting_user_id, FollowStatus::Accepted)
            .await?;

        info!(edge_id = %edge.id, follower_id = %edge.follower_id, "Follow request accepted");
        Ok(FollowResponse::from(edge))
    }

    /// Reject a pending follow request addressed to `acting_user_id`
    #[instrument(skip(self))]
    pub async fn reject_follow_request(
        &self,
        edge_id: Id,
        acting_user_id: Id,
    ) -> ServiceResult<FollowResponse> {
        let edge = self
            .transition(edge_id, acting_user_id, FollowStatus::Rejected)
            .await?;

        info!(edge_id = %edge.id, follower_id = %edge.follower_id, "Follow request rejected");
        Ok(FollowResponse::from(edge))
    }

    /// Stop following a user. The edge row is deleted.
    #[instrument(skip(self))]
    pub async fn unfollow_user(&self, follower_id: Id, following_id: Id) -> ServiceResult<()> {
        let repo = self.ctx.follow_repo();

        match repo.find_by_pair(follower_id, following_id).await? {
            Some(edge) if edge.is_accepted() => {}
            _ => return Err(DomainError::NotFollowing.into()),
        }

        // Lost a race with another unfollow
        if !repo.delete_by_pair(follower_id, following_id).await? {
            return Err(DomainError::NotFollowing.into());
        }

        info!(follower_id = %follower_id, following_id = %following_id, "User unfollowed");
        Ok(())
    }

    /// Accepted followers of a user
    #[instrument(skip(self))]
    pub async fn get_followers(&self, user_id: Id) -> ServiceResult<Vec<FollowEntryResponse>> {
        let entries = self
            .ctx
            .follow_repo()
            .find_incoming(user_id, FollowStatus::Accepted)
            .await?;

        Ok(entries.into_iter().map(FollowEntryResponse::from).collect())
    }

    /// Users this user follows (accepted edges only)
    #[instrument(skip(self))]
    pub async fn get_following(&self, user_id: Id) -> ServiceResult<Vec<FollowEntryResponse>> {
        let entries = self
            .ctx
            .follow_repo()
            .find_outgoing(user_id, FollowStatus::Accepted)
            .await?;

        Ok(entries.into_iter().map(FollowEntryResponse::from).collect())
    }

    /// Pending follow requests waiting on this user
    #[instrument(skip(self))]
    pub async fn get_pending_follows(
        &self,
        user_id: Id,
    ) -> ServiceResult<Vec<FollowEntryResponse>> {
        let entries = self
            .ctx
            .follow_repo()
            .find_incoming(user_id, FollowStatus::Pending)
            .await?;

        Ok(entries.into_iter().map(FollowEntryResponse::from).collect())
    }

    /// Shared accept/reject path. Checks run in order: existence, target, status.
    async fn transition(
        &self,
        edge_id: Id,
        acting_user_id: Id,
        status: FollowStatus,
    ) -> ServiceResult<FollowEdge> {
        let repo = self.ctx.follow_repo();

        let edge = repo
            .find_by_id(edge_id)
            .await?
            .ok_or(DomainError::FollowNotFound(edge_id))?;

        if !edge.is_target(acting_user_id) {
            warn!(
                edge_id = %edge_id,
                acting_user_id = %acting_user_id,
                "Follow request transition by non-target user"
            );
            return Err(DomainError::Unauthorized.into());
        }

        if !edge.is_pending() {
            warn!(edge_id = %edge_id, status = %edge.status, "Follow request is not pending");
            return Err(DomainError::NotPending.into());
        }

        if let Some(updated) = repo
            .transition_status(edge.id, FollowStatus::Pending, status)
            .await?
        {
            return Ok(updated);
        }

        // Another accept, reject or unfollow changed the edge after the read
        match repo.find_by_id(edge_id).await? {
            Some(current) => {
                warn!(
                    edge_id = %edge_id,
                    status = %current.status,
                    "Lost a concurrent follow transition"
                );
                Err(DomainError::NotPending.into())
            }
            None => Err(DomainError::FollowNotFound(edge_id).into()),
        }
    }
}

/// Error for a send that finds an edge already in place
fn existing_edge_error(status: Option<FollowStatus>) -> DomainError {
    match status {
        Some(FollowStatus::Accepted) => DomainError::AlreadyFollowing,
        _ => DomainError::RequestAlreadyPending,
    }
}
