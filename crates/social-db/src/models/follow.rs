//! Follow edge database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for follows table
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub id: i64,
    pub follower_id: i64,
    pub following_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Follow edge joined with the user on the other end
#[derive(Debug, Clone, FromRow)]
pub struct FollowWithUserModel {
    #[sqlx(flatten)]
    pub follow: FollowModel,
    pub user_id: i64,
    pub username: String,
    pub profile_picture: Option<String>,
    pub user_code: String,
}
