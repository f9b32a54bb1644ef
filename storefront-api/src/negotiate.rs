/// Content negotiation
///
/// Pages that carry records can be served as HTML, JSON or XML, chosen from
/// the `Accept` header. The header is scanned left to right and the first
/// recognised media range wins; quality parameters are ignored. A missing or
/// unrecognised header yields HTML.
///
/// JSON bodies are the bare payload. XML bodies wrap lists in a plural root
/// element (`<articles><article>…</article></articles>`).

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::convert::Infallible;
use storefront_shared::models::{article::Article, product::Product, user::User};

use crate::error::ApiError;

/// Representation selected for a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Rendered page
    Html,

    /// `application/json`
    Json,

    /// `application/xml`
    Xml,
}

impl Format {
    /// Picks a representation from request headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .map(Self::from_accept)
            .unwrap_or(Format::Html)
    }

    /// Picks a representation from an `Accept` header value
    pub fn from_accept(accept: &str) -> Self {
        accept
            .split(',')
            .filter_map(|range| {
                let media = range.split(';').next().unwrap_or("").trim();
                match media.to_ascii_lowercase().as_str() {
                    "text/html" | "application/xhtml+xml" | "*/*" => Some(Format::Html),
                    "application/json" => Some(Format::Json),
                    "application/xml" | "text/xml" => Some(Format::Xml),
                    _ => None,
                }
            })
            .next()
            .unwrap_or(Format::Html)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Format
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Format::from_headers(&parts.headers))
    }
}

/// Payloads with an XML representation
pub trait XmlPayload {
    /// Serializes the payload as an XML document body
    fn to_xml(&self) -> Result<String, quick_xml::DeError>;
}

#[derive(Serialize)]
#[serde(rename = "articles")]
struct ArticleList<'a> {
    article: &'a [Article],
}

#[derive(Serialize)]
#[serde(rename = "products")]
struct ProductList<'a> {
    product: &'a [Product],
}

impl XmlPayload for Article {
    fn to_xml(&self) -> Result<String, quick_xml::DeError> {
        quick_xml::se::to_string(self)
    }
}

impl XmlPayload for User {
    fn to_xml(&self) -> Result<String, quick_xml::DeError> {
        quick_xml::se::to_string(self)
    }
}

impl XmlPayload for Vec<Article> {
    fn to_xml(&self) -> Result<String, quick_xml::DeError> {
        quick_xml::se::to_string(&ArticleList { article: self })
    }
}

impl XmlPayload for Vec<Product> {
    fn to_xml(&self) -> Result<String, quick_xml::DeError> {
        quick_xml::se::to_string(&ProductList { product: self })
    }
}

/// A response rendered in the negotiated format
///
/// Holds both the rendered page and the raw payload; only the one matching
/// `format` is sent.
pub struct Negotiated<T> {
    format: Format,
    status: StatusCode,
    page: Html<String>,
    payload: T,
}

impl<T> Negotiated<T> {
    /// Creates a `200 OK` response
    pub fn ok(format: Format, page: Html<String>, payload: T) -> Self {
        Self {
            format,
            status: StatusCode::OK,
            page,
            payload,
        }
    }
}

impl<T> IntoResponse for Negotiated<T>
where
    T: Serialize + XmlPayload,
{
    fn into_response(self) -> Response {
        match self.format {
            Format::Html => (self.status, self.page).into_response(),
            Format::Json => (self.status, Json(self.payload)).into_response(),
            Format::Xml => match self.payload.to_xml() {
                Ok(body) => (
                    self.status,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/xml; charset=utf-8"),
                    )],
                    body,
                )
                    .into_response(),
                Err(e) => {
                    ApiError::InternalError(format!("XML serialization failed: {}", e))
                        .into_response()
                }
            },
        }
    }
}
