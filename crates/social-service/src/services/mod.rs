//! Business logic services
//!
//! This module contains the service layer implementations that validate
//! relationship transitions and orchestrate repository calls.

pub mod context;
pub mod error;
pub mod follow;
pub mod friend;
pub mod relationship;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use friend::FriendRequestService;
pub use relationship::RelationshipService;

#[cfg(test)]
pub(crate) mod test_support {
    use social_core::traits::NewUser;
    use social_core::User;

    use super::ServiceContext;

    pub fn context() -> ServiceContext {
        ServiceContext::in_memory()
    }

    pub async fn seed_user(ctx: &ServiceContext, name: &str) -> User {
        ctx.user_repo()
            .create(&NewUser {
                username: name.to_string(),
                user_code: format!("{name}-code"),
                email: format!("{name}@example.com"),
                password_hash: "hashed_password".to_string(),
                profile_picture: Some(format!("/uploads/{name}.png")),
            })
            .await
            .unwrap()
    }
}
