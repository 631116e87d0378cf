// File: src/handlers/pages.rs
// Purpose: Resolve page requests through the route table and render the view

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use bookshelf_router::normalize_path;

use crate::views::{self, ViewContext};
use crate::AppState;

/// Fallback for every path not claimed by the API
pub async fn page_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = normalize_path(uri.path());

    let Some(matched) = state.routes.resolve(&path) else {
        tracing::debug!(path = %path, "no page route");
        return (
            StatusCode::NOT_FOUND,
            Html(views::not_found(&path).into_string()),
        )
            .into_response();
    };

    let ctx = ViewContext {
        path: &path,
        params: &matched.params,
    };
    let markup = views::page(matched.view().as_ref(), &ctx, &state.plugins);

    Html(markup.into_string()).into_response()
}
