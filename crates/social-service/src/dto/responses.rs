//! Response DTOs for relationship operations
//!
//! All response DTOs implement `Serialize` for JSON output. Ids are plain
//! numbers; users only ever appear as `UserSummary`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use social_core::{FollowStatus, FriendRequestStatus, Id, UserSummary};

// ============================================================================
// Follow Responses
// ============================================================================

/// Follow edge response
#[derive(Debug, Clone, Serialize)]
pub struct FollowResponse {
    pub id: Id,
    pub follower_id: Id,
    pub following_id: Id,
    pub status: FollowStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Follow edge with the user on the other end (follower or followed)
#[derive(Debug, Clone, Serialize)]
pub struct FollowEntryResponse {
    #[serde(flatten)]
    pub follow: FollowResponse,
    pub user: UserSummary,
}

// ============================================================================
// Friend Responses
// ============================================================================

/// Friend request response
#[derive(Debug, Clone, Serialize)]
pub struct FriendRequestResponse {
    pub id: Id,
    pub sender_id: Id,
    pub receiver_id: Id,
    pub status: FriendRequestStatus,
    pub chat_enabled: Option<bool>,
    pub video_enabled: Option<bool>,
    pub feed_enabled: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pending friend request as shown to its receiver
#[derive(Debug, Clone, Serialize)]
pub struct FriendRequestNotice {
    pub id: Id,
    pub sender: UserSummary,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A user's friends and their count
#[derive(Debug, Clone, Serialize)]
pub struct FriendsResponse {
    pub friends: Vec<UserSummary>,
    pub friend_count: usize,
}

/// Friendship check result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FriendStatusResponse {
    pub is_friend: bool,
}
