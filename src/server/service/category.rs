use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::TicketCategoryRepository,
    error::AppError,
    model::category::{CreateTicketCategoryParams, TicketCategory},
    util::parse::is_snowflake,
};

pub struct TicketCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ticket category with its support roles
    pub async fn create(
        &self,
        params: CreateTicketCategoryParams,
    ) -> Result<TicketCategory, AppError> {
        validate(&params)?;

        let repo = TicketCategoryRepository::new(self.db);

        let category = repo.create(params).await?;

        tracing::info!(
            "Created ticket category {} ({}) in guild {}",
            category.id,
            category.name,
            category.guild_id
        );

        Ok(category)
    }

    /// Gets all ticket categories of a guild in creation order
    pub async fn get_by_guild_id(&self, guild_id: &str) -> Result<Vec<TicketCategory>, AppError> {
        let repo = TicketCategoryRepository::new(self.db);

        Ok(repo.get_by_guild_id(guild_id).await?)
    }

    /// Deletes a ticket category of a guild.
    ///
    /// Deleting is idempotent: an id that does not parse, does not exist or belongs to
    /// another guild leaves the store untouched and still succeeds.
    pub async fn delete(&self, guild_id: &str, category_id: &str) -> Result<(), AppError> {
        let Ok(id) = category_id.trim().parse::<i32>() else {
            tracing::debug!(
                "Ignoring delete of unknown ticket category '{}' in guild {}",
                category_id,
                guild_id
            );
            return Ok(());
        };

        let repo = TicketCategoryRepository::new(self.db);

        if repo.delete(guild_id, id).await? {
            tracing::info!("Deleted ticket category {} in guild {}", id, guild_id);
        }

        Ok(())
    }
}

fn validate(params: &CreateTicketCategoryParams) -> Result<(), AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    if !is_snowflake(&params.category_id) {
        return Err(AppError::BadRequest(
            "category_id must be a Discord channel ID".to_string(),
        ));
    }

    if let Some(role) = params.support_roles.iter().find(|role| !is_snowflake(role)) {
        return Err(AppError::BadRequest(format!(
            "support role '{}' is not a Discord role ID",
            role
        )));
    }

    Ok(())
}
