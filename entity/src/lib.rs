//! SeaORM entities for the dashboard's config store.
//!
//! The tables here are shared with the ticket bot process, which reads guild
//! configuration and ticket categories while the dashboard writes them.

pub mod prelude;

pub mod guild_config;
pub mod ticket_category;
pub mod ticket_category_support_role;
