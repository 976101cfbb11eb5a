//! Model to entity mappers
//!
//! This module provides conversions from database models to social-core entities.
//! Status columns are stored as text, so edge and request conversions are
//! fallible: an unknown status is reported as a store error rather than
//! silently coerced.

mod follow;
mod friend_request;
mod user;

pub use follow::follow_with_user;
pub use friend_request::request_with_sender;
