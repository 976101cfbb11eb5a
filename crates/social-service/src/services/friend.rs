//! Friend request service
//!
//! The handshake that precedes a friendship: sending requests, listing the
//! ones waiting on a user and reading the resulting friend list. Confirming
//! a request lives in `RelationshipService`.

use social_core::{DomainError, Id};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    FriendRequestNotice, FriendRequestResponse, FriendStatusResponse, FriendsResponse,
    SendFriendRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Friend request service
pub struct FriendRequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendRequestService<'a> {
    /// Create a new FriendRequestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a friend request.
    ///
    /// Only the sender -> receiver direction is checked for an outstanding
    /// request; a request in the opposite direction does not block this one.
    #[instrument(skip(self))]
    pub async fn send_friend_request(
        &self,
        sender_id: Id,
        receiver_id: Id,
    ) -> ServiceResult<FriendRequestResponse> {
        if sender_id == receiver_id {
            return Err(DomainError::ValidationError(
                "Cannot send a friend request to yourself".to_string(),
            )
            .into());
        }

        // Verify receiver exists
        self.ctx
            .user_repo()
            .find_by_id(receiver_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(receiver_id.to_string()))?;

        let repo = self.ctx.friend_request_repo();
        if repo.find_outstanding(sender_id, receiver_id).await?.is_some() {
            return Err(DomainError::DuplicateRequest.into());
        }

        // A concurrent duplicate surfaces as DuplicateRequest from the store
        let request = repo.create(sender_id, receiver_id).await?;

        info!(
            request_id = %request.id,
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            "Friend request sent"
        );

        Ok(FriendRequestResponse::from(request))
    }

    /// Send a friend request to the user owning a public user code
    #[instrument(skip(self, request), fields(user_code = %request.user_code))]
    pub async fn send_friend_request_by_code(
        &self,
        sender_id: Id,
        request: &SendFriendRequest,
    ) -> ServiceResult<FriendRequestResponse> {
        request.validate()?;

        let receiver = self
            .ctx
            .user_repo()
            .find_by_code(&request.user_code)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(request.user_code.clone()))?;

        self.send_friend_request(sender_id, receiver.id).await
    }

    /// Whether an accepted friend request exists between two users, in either direction
    #[instrument(skip(self))]
    pub async fn check_if_already_friends(&self, user_a: Id, user_b: Id) -> ServiceResult<bool> {
        Ok(self
            .ctx
            .friend_request_repo()
            .accepted_between(user_a, user_b)
            .await?)
    }

    /// `check_if_already_friends` wrapped for callers that return JSON
    pub async fn friend_status(
        &self,
        user_id: Id,
        other_id: Id,
    ) -> ServiceResult<FriendStatusResponse> {
        Ok(FriendStatusResponse {
            is_friend: self.check_if_already_friends(user_id, other_id).await?,
        })
    }

    /// Pending requests addressed to a user, with sender and notice text
    #[instrument(skip(self))]
    pub async fn get_friend_requests_for_user(
        &self,
        receiver_id: Id,
    ) -> ServiceResult<Vec<FriendRequestNotice>> {
        let pending = self
            .ctx
            .friend_request_repo()
            .find_pending_for_receiver(receiver_id)
            .await?;

        Ok(pending.into_iter().map(FriendRequestNotice::from).collect())
    }

    /// A user's friends across both directions of the association, and their count
    #[instrument(skip(self))]
    pub async fn get_friends(&self, user_id: Id) -> ServiceResult<FriendsResponse> {
        let lists = self.ctx.friendship_repo().find_friend_lists(user_id).await?;
        Ok(FriendsResponse::from(lists))
    }
}
