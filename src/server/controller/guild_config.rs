use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::{
    model::{
        api::ErrorDto,
        guild_config::{GuildConfigDto, UpdateGuildConfigDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::guild_config::UpsertGuildConfigParam,
        service::guild_config::GuildConfigService,
        state::AppState,
    },
};

/// Tag for grouping guild config endpoints in OpenAPI documentation
pub static GUILD_CONFIG_TAG: &str = "guild_config";

/// Get a guild's configuration.
///
/// Returns an empty configuration for a guild that has never been configured.
///
/// # Access Control
/// - `ManageGuild` - User must have held `MANAGE_GUILD` in the guild at login
#[utoipa::path(
    get,
    path = "/guilds/{guild_id}/config",
    tag = GUILD_CONFIG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild configuration", body = GuildConfigDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_config(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.session_cookies, &jar)
        .require(&[Permission::ManageGuild(&guild_id)])?;

    let service = GuildConfigService::new(&state.db);

    let config = service.get(&guild_id).await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// Save a guild's configuration.
///
/// Replaces the stored configuration; the last write wins.
///
/// # Access Control
/// - `ManageGuild` - User must have held `MANAGE_GUILD` in the guild at login
#[utoipa::path(
    post,
    path = "/guilds/{guild_id}/config",
    tag = GUILD_CONFIG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = UpdateGuildConfigDto,
    responses(
        (status = 200, description = "Stored guild configuration", body = GuildConfigDto),
        (status = 400, description = "Invalid transcript channel", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guild_config(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(guild_id): Path<String>,
    payload: Result<Json<UpdateGuildConfigDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.session_cookies, &jar)
        .require(&[Permission::ManageGuild(&guild_id)])?;

    let Json(payload) = payload?;

    let service = GuildConfigService::new(&state.db);

    let config = service
        .update(UpsertGuildConfigParam::from_dto(guild_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}
