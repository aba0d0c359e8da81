//! Route tests driving the full router with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Request, Response},
    response::IntoResponse,
    Router,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use http_body_util::BodyExt;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    model::session::{GuildSummary, Session, UserProfile},
    router::router,
    startup::setup_cookie_key,
    state::AppState,
};


struct TestApp {
    router: Router,
    state: AppState,
    _test: TestContext,
}

impl TestApp {
    async fn new(config: Config) -> Self {
        let test = TestBuilder::new().with_config_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let cookie_key = setup_cookie_key(&config).unwrap();

        let state = AppState::new(db, reqwest::Client::new(), config, cookie_key);

        Self {
            router: router().with_state(state.clone()),
            state,
            _test: test,
        }
    }

    async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// `Cookie` header value carrying `session`, encrypted with the app's key.
    fn session_cookie(&self, session: &Session) -> String {
        let jar = PrivateCookieJar::new(self.state.cookie_key.clone());
        let response = self
            .state
            .session_cookies
            .write(jar, session)
            .unwrap()
            .into_response();

        cookie_header(&response)
    }
}

fn guild(id: &str, permissions: &str) -> GuildSummary {
    GuildSummary {
        id: id.to_string(),
        name: format!("Guild {}", id),
        icon: None,
        owner: false,
        permissions: permissions.to_string(),
    }
}

fn session(guilds: Vec<GuildSummary>) -> Session {
    Session::new(
        "access-token".to_string(),
        None,
        UserProfile {
            id: "100000000000000001".to_string(),
            username: "ticket_admin".to_string(),
            discriminator: "0".to_string(),
            avatar: None,
        },
        guilds,
    )
}

/// Session managing `g1` but only a member of `g2`.
fn g1_admin() -> Session {
    session(vec![guild("g1", "32"), guild("g2", "1024")])
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    request("GET", uri, cookie, Body::empty())
}

fn request(method: &str, uri: &str, cookie: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(body).unwrap()
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Turns live `Set-Cookie` headers into the `Cookie` header a browser would send back.
fn cookie_header(response: &Response<Body>) -> String {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter(|value| !value.contains("Max-Age=0"))
        .filter_map(|value| value.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

/// `Set-Cookie` headers of a response as `(name, raw header)` pairs.
fn set_cookies(response: &Response<Body>) -> Vec<(String, String)> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(|value| {
            let name = value.split('=').next().unwrap_or_default().to_string();
            (name, value.to_string())
        })
        .collect()
}

fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
