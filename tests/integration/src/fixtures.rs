//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use social_core::traits::NewUser;
use social_service::dto::{ConfirmFriendRequest, SendFriendRequest};
use social_core::Id;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data.
///
/// Includes a timestamp so repeated runs against one database do not collide.
pub fn unique_suffix() -> String {
    format!(
        "{}{}",
        Utc::now().timestamp_micros(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// A registration with unique username, user code and email
pub fn new_user() -> NewUser {
    let suffix = unique_suffix();
    NewUser {
        username: format!("testuser{suffix}"),
        user_code: format!("code{suffix}"),
        email: format!("test{suffix}@example.com"),
        password_hash: "hashed_password".to_string(),
        profile_picture: None,
    }
}

/// Friend request addressed by user code
pub fn by_code(user_code: &str) -> SendFriendRequest {
    SendFriendRequest {
        user_code: user_code.to_string(),
    }
}

/// Confirmation with every capability switched on
pub fn confirm_all(request_id: Id) -> ConfirmFriendRequest {
    ConfirmFriendRequest {
        request_id,
        chat_enabled: Some(true),
        video_enabled: Some(true),
        feed_enabled: Some(true),
    }
}
