//! # social-core
//!
//! Domain layer containing entities, value objects, repository traits, and errors
//! for the social graph: follow edges, friend requests and the friendships
//! derived from them.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Capabilities, FollowEdge, FollowStatus, FriendLists, FriendRequest, FriendRequestStatus, User,
    UserSummary,
};
pub use error::DomainError;
pub use traits::{
    FollowRepository, FollowWithUser, FriendRequestRepository, FriendRequestWithSender,
    FriendshipRepository, NewUser, RepoResult, UserRepository,
};
pub use value_objects::{Id, IdParseError};
