//! Business logic between the controllers and the data layer.

pub mod category;
pub mod guild_config;
pub mod oauth;

#[cfg(test)]
mod test;
