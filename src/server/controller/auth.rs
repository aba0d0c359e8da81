use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{MeDto, OAuthDiagnosticsDto},
    },
    server::{
        error::{oauth::OAuthError, AppError},
        middleware::auth::AuthGuard,
        service::oauth::DiscordAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Where the browser lands after a successful login.
const DASHBOARD_PATH: &str = "/dashboard";

/// Query parameters Discord appends to the callback redirect.
///
/// All fields are optional: a user who denies consent comes back with `error` and no code.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// Authorization code to exchange for an access token.
    pub code: Option<String>,
    /// CSRF state issued by `/auth/login`.
    pub state: Option<String>,
    /// OAuth error reported by Discord, e.g. `access_denied`.
    pub error: Option<String>,
}

/// Start a Discord login.
///
/// Redirects the browser to Discord's consent screen and stores the CSRF state in a
/// short-lived private cookie. A misconfigured deployment redirects to `/?error=<code>`
/// instead.
#[utoipa::path(
    get,
    path = "/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord authorization"),
        (status = 303, description = "Redirect to /?error=<code> on configuration errors")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.config);

    let (url, csrf_token) = auth_service.login_url()?;

    let jar = state.session_cookies.set_state(jar, csrf_token.secret());

    Ok((jar, Redirect::temporary(url.as_str())))
}

/// Complete a Discord login.
///
/// Validates the code and CSRF state, exchanges the code, fetches the user and their
/// guilds and stores the session cookies. Failures never write a session.
///
/// # Returns
/// - `303 See Other` to `/dashboard` - Logged in
/// - `303 See Other` to `/?error=<code>` - `no_code`, `invalid_state`, `missing_credentials`,
///   `token_exchange_failed`, `auth_failed` or a configuration code
#[utoipa::path(
    get,
    path = "/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 303, description = "Redirect to /dashboard, or to /?error=<code> on failure")
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    // The state is consumed by every callback, including failed ones
    let (jar, expected_state) = state.session_cookies.take_state(jar);

    let Some(code) = params.code.filter(|code| !code.is_empty()) else {
        if let Some(error) = &params.error {
            tracing::warn!("Discord returned OAuth error '{}'", error);
        }
        return Ok((jar, OAuthError::NoCode).into_response());
    };

    if expected_state.is_none() || expected_state != params.state {
        return Ok((jar, OAuthError::InvalidState).into_response());
    }

    let auth_service = DiscordAuthService::new(&state.http_client, &state.config);

    let session = match auth_service.callback(code).await {
        Ok(session) => session,
        Err(err) => return Ok((jar, err).into_response()),
    };

    let jar = match state.session_cookies.write(jar.clone(), &session) {
        Ok(jar) => jar,
        Err(err) => return Ok((jar, err).into_response()),
    };

    Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
}

/// Log out.
///
/// Clears the session cookies. Succeeds without a session.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cookies cleared", body = SuccessDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let jar = state.session_cookies.destroy(jar);

    Ok((jar, Json(SuccessDto { success: true })))
}

/// Get the logged-in user and the guilds they can manage.
///
/// Only guilds where the user held `MANAGE_GUILD` at login are listed, in Discord's order.
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user and manageable guilds", body = MeDto),
        (status = 401, description = "Not logged in or session unreadable", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<impl IntoResponse, AppError> {
    let session = AuthGuard::new(&state.session_cookies, &jar).require(&[])?;

    let guilds = session
        .authorized_guilds()
        .cloned()
        .map(|guild| guild.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(MeDto {
            user: session.user.into_dto(),
            guilds,
        }),
    ))
}

/// Report the OAuth configuration.
///
/// Tells whether the client id and secret are set and usable and which redirect URI is
/// registered with Discord. Secrets are never included.
#[utoipa::path(
    get,
    path = "/auth/debug",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "OAuth configuration diagnostics", body = OAuthDiagnosticsDto)
    ),
)]
pub async fn debug(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.config);

    Ok((StatusCode::OK, Json(auth_service.diagnostics())))
}
