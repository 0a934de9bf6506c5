//! Frontend bundle plumbing: redirect-to-home for unknown paths and
//! no-cache headers on HTML.

use axum::{
    http::{header, HeaderValue, Uri},
    response::{Redirect, Response},
};

use crate::errors::AppError;

/// Fallback for anything neither a route nor a file in the bundle.
///
/// A miss on `/` itself means no bundle is deployed; answering 404 there
/// keeps the redirect from looping.
pub async fn redirect_home(uri: Uri) -> Result<Redirect, AppError> {
    if uri.path() == "/" {
        return Err(AppError::NotFound("No frontend bundle is deployed".to_string()));
    }
    tracing::debug!("Redirecting unknown path {} to /", uri.path());
    Ok(Redirect::temporary("/"))
}

/// Marks HTML responses as uncacheable so a redeployed bundle shows up at once.
pub async fn no_cache_html(mut response: Response) -> Response {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));

    if is_html {
        let headers = response.headers_mut();
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
