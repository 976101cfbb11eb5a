//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method is an independent suspension
//! point; only `FriendshipRepository::confirm_friendship` is atomic across
//! several rows.

use async_trait::async_trait;

use crate::entities::{
    Capabilities, FollowEdge, FollowStatus, FriendLists, FriendRequest, User, UserSummary,
};
use crate::error::DomainError;
use crate::value_objects::Id;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Fields needed to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub user_code: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>>;

    /// Find user by public user code
    async fn find_by_code(&self, user_code: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> RepoResult<User>;
}

// ============================================================================
// Follow Repository
// ============================================================================

/// A follow edge joined with the user on the other end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowWithUser {
    pub edge: FollowEdge,
    pub user: UserSummary,
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Find edge by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<FollowEdge>>;

    /// Find the edge for an ordered (follower, following) pair
    async fn find_by_pair(&self, follower_id: Id, following_id: Id)
        -> RepoResult<Option<FollowEdge>>;

    /// Create a new edge.
    ///
    /// A second edge for the same pair is rejected by the store with
    /// `DomainError::RequestAlreadyPending`.
    async fn create(
        &self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge>;

    /// Move an edge from `from` to `to` in one step.
    ///
    /// Returns `None` when the edge does not exist or is no longer in `from`,
    /// so two racing transitions out of the same status cannot both succeed.
    async fn transition_status(
        &self,
        id: Id,
        from: FollowStatus,
        to: FollowStatus,
    ) -> RepoResult<Option<FollowEdge>>;

    /// Create the edge with `status`, or move an existing one to `status`
    async fn upsert(
        &self,
        follower_id: Id,
        following_id: Id,
        status: FollowStatus,
    ) -> RepoResult<FollowEdge>;

    /// Delete the edge for a pair. Returns false if there was none.
    async fn delete_by_pair(&self, follower_id: Id, following_id: Id) -> RepoResult<bool>;

    /// Edges pointing at `user_id` with the given status, joined with the follower
    async fn find_incoming(&self, user_id: Id, status: FollowStatus)
        -> RepoResult<Vec<FollowWithUser>>;

    /// Edges leaving `user_id` with the given status, joined with the followed user
    async fn find_outgoing(&self, user_id: Id, status: FollowStatus)
        -> RepoResult<Vec<FollowWithUser>>;
}

// ============================================================================
// Friend Request Repository
// ============================================================================

/// A friend request joined with its sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRequestWithSender {
    pub request: FriendRequest,
    pub sender: UserSummary,
}

#[async_trait]
pub trait FriendRequestRepository: Send + Sync {
    /// Find request by ID
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<FriendRequest>>;

    /// Find a pending or accepted request in the sender -> receiver direction
    async fn find_outstanding(&self, sender_id: Id, receiver_id: Id)
        -> RepoResult<Option<FriendRequest>>;

    /// Whether an accepted request exists between the two users, either direction
    async fn accepted_between(&self, user_a: Id, user_b: Id) -> RepoResult<bool>;

    /// Create a new pending request.
    ///
    /// A concurrent duplicate for the same ordered pair is rejected with
    /// `DomainError::DuplicateRequest`.
    async fn create(&self, sender_id: Id, receiver_id: Id) -> RepoResult<FriendRequest>;

    /// Pending requests addressed to `receiver_id`, joined with the sender
    async fn find_pending_for_receiver(&self, receiver_id: Id)
        -> RepoResult<Vec<FriendRequestWithSender>>;
}

// ============================================================================
// Friendship Repository
// ============================================================================

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Load both directions of the friends association for a user
    async fn find_friend_lists(&self, user_id: Id) -> RepoResult<FriendLists>;

    /// Accept a friend request and materialize the friendship as one unit.
    ///
    /// Inside a single transaction: re-validate that the request exists, is
    /// addressed to `receiver_id` and is still pending; mark it accepted with
    /// `capabilities`; upsert accepted follow edges in both directions; add
    /// both users to each other's friends set. Either everything is applied
    /// or nothing is.
    async fn confirm_friendship(
        &self,
        request_id: Id,
        receiver_id: Id,
        capabilities: Capabilities,
    ) -> RepoResult<FriendRequest>;
}
