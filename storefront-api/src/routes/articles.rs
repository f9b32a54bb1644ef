/// Article endpoints
///
/// # Endpoints
///
/// - `GET /` - List all articles
/// - `GET /article/view/:article_id` - Show one article
/// - `GET /article/create` - Article creation form (authenticated)
/// - `POST /article/create` - Create an article (authenticated)
///
/// The list, view and create endpoints negotiate HTML, JSON or XML from the
/// `Accept` header.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    middleware::session::Session,
    negotiate::{Format, Negotiated},
    pages,
};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use storefront_shared::models::article::Article;
use tracing::info;

/// Article submission form
///
/// Missing fields are treated as empty text.
#[derive(Debug, Deserialize)]
pub struct ArticleForm {
    /// Article title
    #[serde(default)]
    pub title: String,

    /// Article body
    #[serde(default)]
    pub content: String,
}

/// Home page listing every article in creation order
pub async fn index(
    State(state): State<AppState>,
    Session(session): Session,
    format: Format,
) -> Negotiated<Vec<Article>> {
    let articles = state.store.articles.list().await;
    let page = pages::index(session, &articles);

    Negotiated::ok(format, page, articles)
}

/// Shows a single article
///
/// # Errors
///
/// - `404 Not Found`: The id is not a number or no article has it
pub async fn view_article(
    State(state): State<AppState>,
    Session(session): Session,
    format: Format,
    Path(article_id): Path<String>,
) -> ApiResult<Negotiated<Article>> {
    let id = article_id
        .parse::<u64>()
        .map_err(|_| ApiError::NotFound(format!("No article with id '{}'", article_id)))?;

    let article = state.store.articles.get(id).await?;
    let page = pages::article(session, &article);

    Ok(Negotiated::ok(format, page, article))
}

/// Shows the article creation form
pub async fn show_create_form(Session(session): Session) -> Html<String> {
    pages::create_article(session)
}

/// Creates an article from the submitted form
///
/// # Endpoint
///
/// ```text
/// POST /article/create
/// Content-Type: application/x-www-form-urlencoded
///
/// title=Hello&content=World
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: The body is not a form submission
/// - `401 Unauthorized`: No session (enforced by the route gate)
pub async fn create_article(
    State(state): State<AppState>,
    Session(session): Session,
    format: Format,
    form: Result<Form<ArticleForm>, FormRejection>,
) -> ApiResult<Negotiated<Article>> {
    let Form(form) = form?;

    let article = state.store.articles.create(form.title, form.content).await;
    info!(article_id = article.id, "Article submitted");

    let page = pages::submission_successful(session, &article);
    Ok(Negotiated::ok(format, page, article))
}
