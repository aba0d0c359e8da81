//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let config = factory::create_guild_config(&db, "123456789").await?;
//!
//! let category = factory::ticket_category::TicketCategoryFactory::new(&db, "123456789")
//!     .name("Billing")
//!     .support_roles(["111", "222"])
//!     .build()
//!     .await?;
//! ```

pub mod guild_config;
pub mod helpers;
pub mod ticket_category;

pub use guild_config::create_guild_config;
pub use ticket_category::create_category;
