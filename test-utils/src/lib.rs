//! Ticketboard Test Utils
//!
//! Shared testing utilities for the ticketboard dashboard. This crate offers a builder for
//! test contexts backed by in-memory SQLite databases, factories for config store rows, and a
//! mock Discord OAuth provider for exercising the login flow without network access.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for guild configs and ticket categories
//! - **discord**: Discord payload fixtures and the `MockDiscord` provider
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_category_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_config_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod discord;
pub mod error;
pub mod factory;
