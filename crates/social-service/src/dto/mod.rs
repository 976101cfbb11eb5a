//! Data transfer objects for relationship operations
//!
//! This module provides:
//! - Request DTOs with validation for caller inputs
//! - Response DTOs for serializing results
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ConfirmFriendRequest, SendFriendRequest};

pub use responses::{
    FollowEntryResponse, FollowResponse, FriendRequestNotice, FriendRequestResponse,
    FriendStatusResponse, FriendsResponse,
};
