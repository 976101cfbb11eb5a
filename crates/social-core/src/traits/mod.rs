//! Domain traits - storage ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    FollowRepository, FollowWithUser, FriendRequestRepository, FriendRequestWithSender,
    FriendshipRepository, NewUser, RepoResult, UserRepository,
};
