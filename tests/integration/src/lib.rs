//! Integration test utilities for the social graph
//!
//! This crate provides helpers for running end-to-end relationship
//! scenarios through the service layer, against PostgreSQL when
//! `DATABASE_URL` is set and against the in-memory store otherwise.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
