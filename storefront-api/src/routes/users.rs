/// User endpoints
///
/// This module provides the login, logout and registration flow.
///
/// # Endpoints
///
/// - `GET /u/login` - Login form (anonymous)
/// - `POST /u/login` - Check credentials and start a session (anonymous)
/// - `GET|POST /u/logout` - End the session (authenticated)
/// - `GET /u/register` - Registration form (anonymous)
/// - `POST /u/register` - Create an account and start a session (anonymous)
///
/// A session is just the `token` cookie; see
/// [`storefront_shared::auth::gate`].

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    middleware::session::{end_session, start_session, Session},
    negotiate::{Format, Negotiated},
    pages,
};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use storefront_shared::{auth::gate::SessionStatus, store::StoreError};
use tracing::{info, warn};

const INVALID_CREDENTIALS: &str = "Invalid credentials provided";

/// Login and registration form
///
/// Missing fields are treated as empty text.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    /// Username
    #[serde(default)]
    pub username: String,

    /// Password
    #[serde(default)]
    pub password: String,
}

/// Responds to a rejected form with 400
///
/// HTML clients get the form again with the error shown; JSON and XML
/// clients get the standard error body.
fn form_failure(format: Format, page: Html<String>, message: &str) -> Response {
    match format {
        Format::Html => (StatusCode::BAD_REQUEST, page).into_response(),
        Format::Json | Format::Xml => ApiError::BadRequest(message.to_string()).into_response(),
    }
}

/// Shows the login form
pub async fn show_login_form(Session(session): Session) -> Html<String> {
    pages::login(session, None)
}

/// Logs a user in
///
/// # Errors
///
/// - `400 Bad Request`: Unknown username or wrong password, or a malformed body
pub async fn login(
    State(state): State<AppState>,
    Session(session): Session,
    format: Format,
    jar: CookieJar,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> ApiResult<Response> {
    let Form(form) = form?;

    if !state
        .store
        .users
        .validate_credentials(&form.username, &form.password)
        .await
    {
        warn!(username = %form.username, "Login failed");
        let page = pages::login(session, Some(INVALID_CREDENTIALS));
        return Ok(form_failure(format, page, INVALID_CREDENTIALS));
    }

    info!(username = %form.username, "User logged in");
    let jar = start_session(jar, state.secure_cookies());

    Ok((jar, pages::login_successful(SessionStatus::Authenticated)).into_response())
}

/// Logs the user out and returns to the home page
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (end_session(jar), Redirect::temporary("/"))
}

/// Shows the registration form
pub async fn show_registration_form(Session(session): Session) -> Html<String> {
    pages::register(session, None)
}

/// Registers a new user and logs them in
///
/// # Errors
///
/// - `400 Bad Request`: Blank password, taken username, or a malformed body.
///   No session cookie is set in that case.
pub async fn register(
    State(state): State<AppState>,
    Session(session): Session,
    format: Format,
    jar: CookieJar,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> ApiResult<Response> {
    let Form(form) = form?;

    match state
        .store
        .users
        .register(&form.username, &form.password)
        .await
    {
        Ok(user) => {
            info!(username = %user.username, "User registered");
            let jar = start_session(jar, state.secure_cookies());
            let page = pages::registration_successful(SessionStatus::Authenticated, &user);

            Ok((jar, Negotiated::ok(format, page, user)).into_response())
        }
        Err(err @ (StoreError::EmptyPassword | StoreError::UsernameTaken(_))) => {
            warn!(username = %form.username, error = %err, "Registration failed");
            let message = err.to_string();
            let page = pages::register(session, Some(&message));

            Ok(form_failure(format, page, &message))
        }
        Err(err) => Err(err.into()),
    }
}
