//! # Lesson Routes Module
//!
//! Routes for the lesson catalog and the canonical attribute-update
//! contract.
//!
//! ## Structure
//! - `get.rs` — `GET /lessons`
//! - `put.rs` — `PUT /updateLessons` (canonical body-based form) and
//!   `PUT /updateLesson/{ids}/{attribute}/{newValue}` (path-parameter
//!   adapter over the same validation and store logic)
//! - `common.rs` — shared input validation helpers

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;
use get::list_lessons;
use put::{update_lesson_by_path, update_lessons};

pub mod common;
pub mod get;
pub mod put;

/// Builds the lesson route group.
pub fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/lessons", get(list_lessons))
        .route("/updateLessons", put(update_lessons))
        .route(
            "/updateLesson/{ids}/{attribute}/{newValue}",
            put(update_lesson_by_path),
        )
}
