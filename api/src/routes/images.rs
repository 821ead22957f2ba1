//! Static image serving with an svg-only guard.
//!
//! Files are read from the configured `IMAGE_ROOT` directory. Any request
//! under `/images/` whose path does not end in the literal extension
//! `.svg` is rejected with 404, regardless of whether a matching file
//! exists on disk.

use axum::{
    Router,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use common::Config;

use crate::response::ApiError;
use crate::state::AppState;

pub fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/test-image", get(test_image))
        .route("/images/{*path}", get(serve_image))
}

/// GET /test-image
///
/// 302 redirect to a known catalog asset, kept as a smoke test for the
/// image pipeline.
async fn test_image() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/images/calculator.svg")],
    )
}

/// GET /images/{*path}
///
/// Serves an svg from the image root. Non-svg extensions and paths with
/// traversal components are 404, not 400: callers cannot probe which files
/// exist.
async fn serve_image(Path(path): Path<String>) -> Result<impl IntoResponse, ApiError> {
    if !path.ends_with(".svg") {
        return Err(ApiError::NotFound("Image not found".into()));
    }
    if path
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(ApiError::NotFound("Image not found".into()));
    }

    let fs_path = std::path::Path::new(&Config::get().image_root).join(&path);
    let bytes = tokio::fs::read(&fs_path)
        .await
        .map_err(|_| ApiError::NotFound("Image not found".into()))?;

    let mime = mime_guess::from_path(&fs_path)
        .first_or_octet_stream()
        .to_string();

    Ok(([(header::CONTENT_TYPE, mime)], bytes))
}
