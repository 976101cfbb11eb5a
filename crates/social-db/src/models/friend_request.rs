//! Friend request database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for friend_requests table
#[derive(Debug, Clone, FromRow)]
pub struct FriendRequestModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub chat_enabled: Option<bool>,
    pub video_enabled: Option<bool>,
    pub feed_enabled: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Friend request joined with its sender
#[derive(Debug, Clone, FromRow)]
pub struct FriendRequestWithSenderModel {
    #[sqlx(flatten)]
    pub request: FriendRequestModel,
    pub sender_username: String,
    pub sender_profile_picture: Option<String>,
}
