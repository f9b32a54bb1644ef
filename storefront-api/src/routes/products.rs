/// Product catalog endpoint
///
/// - `GET /products` - List every product from the external database
///
/// # Errors
///
/// - `500 Internal Server Error`: The database query or row decoding failed
/// - `503 Service Unavailable`: The database did not answer in time

use crate::{
    app::AppState,
    error::ApiResult,
    middleware::session::Session,
    negotiate::{Format, Negotiated},
    pages,
};
use axum::extract::State;
use storefront_shared::models::product::Product;

/// Lists the product catalog
pub async fn list_products(
    State(state): State<AppState>,
    Session(session): Session,
    format: Format,
) -> ApiResult<Negotiated<Vec<Product>>> {
    let products = state.products.list_products().await?;
    let page = pages::products(session, &products);

    Ok(Negotiated::ok(format, page, products))
}
