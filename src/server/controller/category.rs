use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        category::{CreateTicketCategoryDto, TicketCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::CreateTicketCategoryParams,
        service::category::TicketCategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteCategoryParams {
    /// ID of the category to delete. `categoryId` is accepted as well.
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<String>,
}

/// Get the ticket categories of a guild.
///
/// Categories are listed in creation order with support roles in configured order.
///
/// # Access Control
/// - `ManageGuild` - User must have held `MANAGE_GUILD` in the guild at login
#[utoipa::path(
    get,
    path = "/guilds/{guild_id}/categories",
    tag = CATEGORY_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Ticket categories of the guild", body = Vec<TicketCategoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.session_cookies, &jar)
        .require(&[Permission::ManageGuild(&guild_id)])?;

    let service = TicketCategoryService::new(&state.db);

    let categories: Vec<TicketCategoryDto> = service
        .get_by_guild_id(&guild_id)
        .await?
        .into_iter()
        .map(|category| category.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(categories)))
}

/// Create a ticket category.
///
/// # Access Control
/// - `ManageGuild` - User must have held `MANAGE_GUILD` in the guild at login
///
/// # Returns
/// - `201 Created` - The created category with its generated id
/// - `400 Bad Request` - Blank name or a non-numeric channel or role id
#[utoipa::path(
    post,
    path = "/guilds/{guild_id}/categories",
    tag = CATEGORY_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateTicketCategoryDto,
    responses(
        (status = 201, description = "Successfully created ticket category", body = TicketCategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(guild_id): Path<String>,
    payload: Result<Json<CreateTicketCategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.session_cookies, &jar)
        .require(&[Permission::ManageGuild(&guild_id)])?;

    // Body errors are only reported to callers who passed the guild check
    let Json(payload) = payload?;

    let service = TicketCategoryService::new(&state.db);

    // Convert DTO to server model
    let params = CreateTicketCategoryParams::from_dto(guild_id, payload);

    let category = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Delete a ticket category.
///
/// Succeeds even when the category does not exist or belongs to another guild; in that
/// case nothing is deleted.
///
/// # Access Control
/// - `ManageGuild` - User must have held `MANAGE_GUILD` in the guild at login
#[utoipa::path(
    delete,
    path = "/guilds/{guild_id}/categories",
    tag = CATEGORY_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        DeleteCategoryParams
    ),
    responses(
        (status = 200, description = "Category deleted or already absent", body = SuccessDto),
        (status = 400, description = "Missing category_id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User cannot manage this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(guild_id): Path<String>,
    Query(params): Query<DeleteCategoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.session_cookies, &jar)
        .require(&[Permission::ManageGuild(&guild_id)])?;

    let Some(category_id) = params.category_id.filter(|id| !id.trim().is_empty()) else {
        return Err(AppError::BadRequest("category_id is required".to_string()));
    };

    let service = TicketCategoryService::new(&state.db);

    service.delete(&guild_id, &category_id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
