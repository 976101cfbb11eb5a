//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use social_core::entities::{FollowEdge, FriendLists, FriendRequest};
use social_core::traits::{FollowWithUser, FriendRequestWithSender};

use super::responses::{
    FollowEntryResponse, FollowResponse, FriendRequestNotice, FriendRequestResponse,
    FriendsResponse,
};

// ============================================================================
// Follow Mappers
// ============================================================================

impl From<&FollowEdge> for FollowResponse {
    fn from(edge: &FollowEdge) -> Self {
        Self {
            id: edge.id,
            follower_id: edge.follower_id,
            following_id: edge.following_id,
            status: edge.status,
            created_at: edge.created_at,
            updated_at: edge.updated_at,
        }
    }
}

impl From<FollowEdge> for FollowResponse {
    fn from(edge: FollowEdge) -> Self {
        Self::from(&edge)
    }
}

impl From<FollowWithUser> for FollowEntryResponse {
    fn from(entry: FollowWithUser) -> Self {
        Self {
            follow: FollowResponse::from(&entry.edge),
            user: entry.user,
        }
    }
}

// ============================================================================
// Friend Mappers
// ============================================================================

impl From<&FriendRequest> for FriendRequestResponse {
    fn from(request: &FriendRequest) -> Self {
        Self {
            id: request.id,
            sender_id: request.sender_id,
            receiver_id: request.receiver_id,
            status: request.status,
            chat_enabled: request.capabilities.chat_enabled,
            video_enabled: request.capabilities.video_enabled,
            feed_enabled: request.capabilities.feed_enabled,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

impl From<FriendRequest> for FriendRequestResponse {
    fn from(request: FriendRequest) -> Self {
        Self::from(&request)
    }
}

impl From<FriendRequestWithSender> for FriendRequestNotice {
    fn from(pending: FriendRequestWithSender) -> Self {
        Self {
            id: pending.request.id,
            message: format!("{} sent you a friend request.", pending.sender.username),
            sender: pending.sender,
            created_at: pending.request.created_at,
        }
    }
}

impl From<FriendLists> for FriendsResponse {
    fn from(lists: FriendLists) -> Self {
        let friends = lists.merged();
        Self {
            friend_count: friends.len(),
            friends,
        }
    }
}
