/// Session extraction and route gates
///
/// [`Session`] reads the session indicator from the request cookies and is
/// passed to handlers as an explicit argument. The gate middlewares wrap
/// route groups with the allow/deny decisions from
/// [`storefront_shared::auth::gate`].
///
/// # Example
///
/// ```no_run
/// use axum::{middleware, routing::get, Router};
/// use storefront_api::middleware::session::require_authenticated;
///
/// let app: Router = Router::new()
///     .route("/private", get(|| async { "ok" }))
///     .layer(middleware::from_fn(require_authenticated));
/// ```

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;
use storefront_shared::auth::{
    gate::{self, SessionStatus},
    session::{generate_session_token, SESSION_COOKIE},
};

use crate::error::ApiError;

/// Session status of the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session(pub SessionStatus);

impl Session {
    /// Reads the session indicator from a cookie jar
    pub fn from_jar(jar: &CookieJar) -> Self {
        Session(SessionStatus::from_token(
            jar.get(SESSION_COOKIE).map(|cookie| cookie.value()),
        ))
    }

    /// Session status
    pub fn status(self) -> SessionStatus {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_jar(&CookieJar::from_headers(&parts.headers)))
    }
}

/// Adds a fresh session cookie to the jar
pub fn start_session(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, generate_session_token()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);

    jar.add(cookie)
}

/// Removes the session cookie from the jar
pub fn end_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// Rejects requests without the session indicator with 401
pub async fn require_authenticated(
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate::require_authenticated(Session::from_jar(&jar).status())?;
    Ok(next.run(req).await)
}

/// Rejects requests carrying the session indicator with 401
pub async fn require_anonymous(
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate::require_anonymous(Session::from_jar(&jar).status())?;
    Ok(next.run(req).await)
}
