mod category;
mod guild_config;
