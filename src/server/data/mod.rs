//! Database repository layer for the config store.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Every query is scoped by guild ID.

pub mod category;
pub mod guild_config;

#[cfg(test)]
mod test;
