//! Relationship service - friend request confirmation
//!
//! Confirming a request is the one operation that touches every relation:
//! the request itself, both follow edges and both rows of the friends
//! association. The writes happen in a single unit inside
//! `FriendshipRepository::confirm_friendship`; this service performs the
//! caller-facing precondition checks and logging around it.

use social_core::entities::Capabilities;
use social_core::{DomainError, Id};
use tracing::{info, instrument, warn};

use crate::dto::{ConfirmFriendRequest, FriendRequestResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Relationship service
pub struct RelationshipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RelationshipService<'a> {
    /// Create a new RelationshipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Accept a friend request on behalf of its receiver.
    ///
    /// Checks, first failure wins: the request exists, `receiver_id` is its
    /// receiver, it is still pending. The store re-checks all three inside
    /// the transaction, so a concurrent confirmation loses with
    /// `RequestNotPending` and nothing is written twice.
    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    pub async fn confirm_friend_request(
        &self,
        request: &ConfirmFriendRequest,
        receiver_id: Id,
    ) -> ServiceResult<FriendRequestResponse> {
        let request_id = request.request_id;

        let current = self
            .ctx
            .friend_request_repo()
            .find_by_id(request_id)
            .await?
            .ok_or(DomainError::RequestNotFound(request_id))?;

        if current.receiver_id != receiver_id {
            warn!(receiver_id = %receiver_id, "Friend request confirmed by non-receiver");
            return Err(DomainError::Unauthorized.into());
        }

        if !current.is_pending() {
            warn!(status = %current.status, "Friend request is not pending");
            return Err(DomainError::RequestNotPending.into());
        }

        let capabilities = Capabilities {
            chat_enabled: request.chat_enabled,
            video_enabled: request.video_enabled,
            feed_enabled: request.feed_enabled,
        };

        let accepted = self
            .ctx
            .friendship_repo()
            .confirm_friendship(request_id, receiver_id, capabilities)
            .await?;

        info!(
            sender_id = %accepted.sender_id,
            receiver_id = %accepted.receiver_id,
            "Friend request confirmed"
        );

        Ok(FriendRequestResponse::from(accepted))
    }
}
