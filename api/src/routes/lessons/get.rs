use axum::{Json, extract::State};
use db::models::Lesson;
use db::repositories::LessonRepository;

use crate::response::ApiError;
use crate::state::AppState;

/// GET /lessons
///
/// Returns the full contents of the lesson collection as a JSON array, in
/// the store's natural order. Idempotent across repeated calls with no
/// intervening writes.
///
/// ### Responses
/// - `200 OK` — array of lessons
/// - `500 Internal Server Error` — `{ "error": "Failed to fetch lessons" }`;
///   the underlying failure is logged, not surfaced
pub async fn list_lessons(State(state): State<AppState>) -> Result<Json<Vec<Lesson>>, ApiError> {
    let lessons = LessonRepository::find_all(state.store())
        .await
        .map_err(|e| ApiError::store("Failed to fetch lessons", e))?;

    Ok(Json(lessons))
}
