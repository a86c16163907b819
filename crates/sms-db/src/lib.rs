//! # sms-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `sms-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional dispatch write
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sms_db::pool::{create_pool, DatabaseConfig};
//! use sms_db::PgMemberRepository;
//! use sms_core::traits::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let member_repo = PgMemberRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgGroupRepository, PgMemberRepository, PgMessageRepository, PgTemplateRepository,
};

/// Load the SQL migrations for the five collections
///
/// Resolves the migrations directory relative to this crate, so callers can
/// run it from any working directory.
pub async fn migrator() -> Result<sqlx::migrate::Migrator, sqlx::migrate::MigrateError> {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    sqlx::migrate::Migrator::new(dir).await
}
