use axum::{
    http::{header, HeaderMap},
    response::Response,
};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};

use crate::server::model::session::{GuildSummary, Session, UserProfile};


fn key() -> Key {
    Key::from(&[7u8; 64][..])
}

fn jar() -> PrivateCookieJar {
    PrivateCookieJar::new(key())
}

/// Turns the `Set-Cookie` headers of a response into the `Cookie` header a browser sends back.
fn request_headers(response: &Response) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for set_cookie in response.headers().get_all(header::SET_COOKIE) {
        let pair = set_cookie
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();
        headers.append(header::COOKIE, pair.parse().unwrap());
    }
    headers
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
        Some(std::time::Duration::from_secs(3600)),
        UserProfile {
            id: "100000000000000001".to_string(),
            username: "ticket_admin".to_string(),
            discriminator: "0".to_string(),
            avatar: Some("a1b2c3".to_string()),
        },
        guilds,
    )
}
