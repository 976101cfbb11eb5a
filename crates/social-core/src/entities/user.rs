//! User entity - an account on the social network

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Id;

/// User account. The password hash is deliberately absent: it stays inside
/// the storage layer and is never loaded into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub username: String,
    /// Unique public-facing short code users share with each other
    pub user_code: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Id, username: String, user_code: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            user_code,
            email,
            profile_picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public projection including the user code
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            profile_picture: self.profile_picture.clone(),
            user_code: Some(self.user_code.clone()),
        }
    }

    /// Public projection without the user code (friend request senders)
    pub fn sender_summary(&self) -> UserSummary {
        UserSummary {
            user_code: None,
            ..self.summary()
        }
    }
}

/// Restricted user projection; the only user shape that leaves the core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Id,
    pub username: String,
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_code: Option<String>,
}
