use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{GuildDto, MeDto, OAuthDiagnosticsDto, UserDto},
        category::{CreateTicketCategoryDto, TicketCategoryDto},
        guild_config::{GuildConfigDto, UpdateGuildConfigDto},
    },
    server::{
        controller::{
            auth::{self, callback, debug, get_me, login, logout, AUTH_TAG},
            category::{self, create_category, delete_category, get_categories, CATEGORY_TAG},
            guild_config::{self, get_guild_config, update_guild_config, GUILD_CONFIG_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Ticketboard", description = "Dashboard API of the ticket bot"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_me,
        auth::debug,
        guild_config::get_guild_config,
        guild_config::update_guild_config,
        category::get_categories,
        category::create_category,
        category::delete_category,
    ),
    components(schemas(
        ErrorDto,
        SuccessDto,
        UserDto,
        GuildDto,
        MeDto,
        OAuthDiagnosticsDto,
        GuildConfigDto,
        UpdateGuildConfigDto,
        TicketCategoryDto,
        CreateTicketCategoryDto,
    )),
    tags(
        (name = AUTH_TAG, description = "Discord login and session"),
        (name = GUILD_CONFIG_TAG, description = "Per-guild bot configuration"),
        (name = CATEGORY_TAG, description = "Ticket categories"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(get_me))
        .route("/auth/debug", get(debug))
        .route(
            "/guilds/{guild_id}/config",
            get(get_guild_config).post(update_guild_config),
        )
        .route(
            "/guilds/{guild_id}/categories",
            get(get_categories)
                .post(create_category)
                .delete(delete_category),
        )
        .route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
