//! # social-service
//!
//! Application layer: follow edges, friend requests and friendship
//! confirmation on top of the social-core repository traits.

pub mod dto;
pub mod services;

pub use services::{
    FollowService, FriendRequestService, RelationshipService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
