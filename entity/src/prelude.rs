pub use super::guild_config::Entity as GuildConfig;
pub use super::ticket_category::Entity as TicketCategory;
pub use super::ticket_category_support_role::Entity as TicketCategorySupportRole;
