//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → uptime probe
//! - `/lessons`, `/updateLesson/...`, `/updateLessons` → lesson catalog and updates
//! - `/newOrder` → order creation
//! - `/images/...`, `/test-image` → svg-only static assets
//! - `/webstore/home` → storefront greeting

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod images;
pub mod lessons;
pub mod orders;
pub mod webstore;

/// Builds the complete application router.
///
/// Keeping route registration here (rather than in `main`) keeps `main`
/// focused on startup and avoids changing the `Router` type after
/// construction.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .merge(lessons::lesson_routes())
        .merge(orders::order_routes())
        .merge(images::image_routes())
        .merge(webstore::webstore_routes())
        .with_state(app_state)
}
