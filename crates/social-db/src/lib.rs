//! # social-db
//!
//! Storage layer implementing the social-core repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx, with the schema under `migrations/`
//! - Database models with SQLx `FromRow` derives and their entity mappers
//! - `MemoryStore`, an in-process implementation of every repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use social_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use social_db::repositories::PgFollowRepository;
//! use social_core::traits::FollowRepository;
//!
//! async fn example(app: &social_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from(&app.database)).await?;
//!     run_migrations(&pool).await?;
//!     let follows = PgFollowRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, run_migrations_from, DatabaseConfig, PgPool};
pub use repositories::{
    PgFollowRepository, PgFriendRequestRepository, PgFriendshipRepository, PgUserRepository,
};
