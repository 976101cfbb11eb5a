//! Database models - SQLx-compatible structs for PostgreSQL tables

mod follow;
mod friend_request;
mod user;

pub use follow::{FollowModel, FollowWithUserModel};
pub use friend_request::{FriendRequestModel, FriendRequestWithSenderModel};
pub use user::{UserModel, UserSummaryModel};
