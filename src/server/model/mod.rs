//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The session model is the exception: it
//! never touches the database and lives entirely in the browser's cookies.

pub mod category;
pub mod guild_config;
pub mod session;
