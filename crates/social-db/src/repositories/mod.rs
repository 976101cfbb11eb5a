//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in social-core.
//! Each repository handles database operations for one part of the graph.

mod error;
mod follow;
mod friend_request;
mod friendship;
mod user;

pub use follow::PgFollowRepository;
pub use friend_request::PgFriendRequestRepository;
pub use friendship::PgFriendshipRepository;
pub use user::PgUserRepository;
