use axum::{Router, routing::get};

use crate::state::AppState;

/// Builds the `/webstore` route group.
pub fn webstore_routes() -> Router<AppState> {
    Router::new().route("/webstore/home", get(home))
}

/// GET /webstore/home
///
/// Plain-text storefront greeting.
async fn home() -> &'static str {
    "Welcome to the Webstore Home Page!"
}
