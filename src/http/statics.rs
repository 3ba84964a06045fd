//! Read-only file serving for uploaded content and the presentation assets.
//! Declared extensions are trusted; there is no content sniffing.

use std::path::Path;

use axum::extract::{Path as UrlPath, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use super::AppState;

pub async fn serve_upload(
    State(state): State<AppState>,
    UrlPath(filename): UrlPath<String>,
) -> Response {
    serve_file(&state.config.uploads_dir, &filename).await
}

/// Catch-all for everything outside `/api` and `/uploads`: the public assets
/// directory, with `index.html` standing in for the root and for paths the
/// front-end routes client-side.
pub async fn serve_public(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return StatusCode::NOT_FOUND.into_response();
    }

    let rel = uri.path().trim_start_matches('/');
    let rel = if rel.is_empty() { "index.html" } else { rel };

    let response = serve_file(&state.config.public_dir, rel).await;
    if response.status() == StatusCode::NOT_FOUND && !rel.contains('.') {
        return serve_file(&state.config.public_dir, "index.html").await;
    }
    response
}

async fn serve_file(root: &Path, rel: &str) -> Response {
    if !is_safe_path(rel) {
        return StatusCode::NOT_FOUND.into_response();
    }
    match tokio::fs::read(root.join(rel)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type_for(rel))], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

fn is_safe_path(rel: &str) -> bool {
    !rel.is_empty()
        && !rel.starts_with('/')
        && !rel.contains('\\')
        && !rel.split('/').any(|part| part == "..")
}

fn content_type_for(rel: &str) -> &'static str {
    let extension = Path::new(rel)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "ogg" => "video/ogg",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    }
}
