//! Request DTOs for relationship operations
//!
//! The caller's own id never appears here: it comes from the authentication
//! layer and is passed to the services separately.

use serde::Deserialize;
use social_core::Id;
use validator::Validate;

/// Friend request addressed by the receiver's public user code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendFriendRequest {
    #[validate(length(min = 1, max = 64, message = "User code must be 1-64 characters"))]
    pub user_code: String,
}

/// Receiver's confirmation of a friend request, with capability choices
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct ConfirmFriendRequest {
    pub request_id: Id,
    #[serde(default)]
    pub chat_enabled: Option<bool>,
    #[serde(default)]
    pub video_enabled: Option<bool>,
    #[serde(default)]
    pub feed_enabled: Option<bool>,
}
