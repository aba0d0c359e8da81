//! HTTP handlers.
//!
//! Handlers check access through `AuthGuard`, convert DTOs to domain parameters, call a
//! service and convert the result back into a DTO.

pub mod auth;
pub mod category;
pub mod guild_config;

#[cfg(test)]
mod test;
