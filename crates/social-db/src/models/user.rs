//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub user_code: String,
    pub email: String,
    pub password_hash: String,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public columns of a user, as selected by join queries
#[derive(Debug, Clone, FromRow)]
pub struct UserSummaryModel {
    pub id: i64,
    pub username: String,
    pub profile_picture: Option<String>,
    pub user_code: Option<String>,
}
