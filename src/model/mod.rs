//! Data transfer objects exchanged with the dashboard frontend.

pub mod api;
pub mod auth;
pub mod category;
pub mod guild_config;
