//! Request-scoped session handling and the guild access guard.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
