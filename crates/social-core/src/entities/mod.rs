//! Domain entities - core business objects

mod follow;
mod friend_request;
mod friendship;
mod user;

pub use follow::{FollowEdge, FollowStatus};
pub use friend_request::{Capabilities, FriendRequest, FriendRequestStatus};
pub use friendship::FriendLists;
pub use user::{User, UserSummary};
