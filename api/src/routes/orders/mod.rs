use axum::{Router, routing::post};

use crate::state::AppState;
use post::create_order;

pub mod post;

/// Builds the order route group.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/newOrder", post(create_order))
}
