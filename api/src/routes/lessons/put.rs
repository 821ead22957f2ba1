use axum::{
    Json,
    extract::{Path, State},
};
use db::repositories::{LessonRepository, SpaceReservation};
use serde_json::Value;

use crate::response::{ApiError, LessonsUpdated};
use crate::routes::lessons::common;
use crate::state::AppState;

/// PUT /updateLessons
///
/// Canonical body-based update endpoint with two modes, selected by shape:
///
/// 1. **Batch space reservation** — `{ "spaceNeeded": [{ "id": 1001,
///    "spaces": 2 }, ...] }`. Each entry is applied as one atomic guarded
///    decrement (`spaces >= requested`), so concurrent requests can never
///    drive `spaces` below zero. Processing stops at the first entry that
///    fails; earlier entries remain applied.
/// 2. **Single attribute assignment** — `{ "id": 1001, "attribute":
///    "price", "newValue": 120 }`. Same validation and store logic as the
///    path-parameter form.
///
/// ### Responses
/// - `200 OK` — `{ "message": ..., "modifiedCount": n }`
/// - `400 Bad Request` — neither shape fully present, bad attribute or value
/// - `404 Not Found` — unknown lesson id
/// - `409 Conflict` — lesson has fewer spaces than requested
/// - `500 Internal Server Error` — store failure
pub async fn update_lessons(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<LessonsUpdated>, ApiError> {
    if let Some(space_needed) = body.get("spaceNeeded") {
        let requests = common::parse_space_requests(space_needed)?;

        let mut reserved = 0u64;
        for request in &requests {
            let outcome =
                LessonRepository::reserve_spaces(state.store(), request.id, request.spaces)
                    .await
                    .map_err(|e| ApiError::store("Failed to update lessons", e))?;

            match outcome {
                SpaceReservation::Reserved => reserved += 1,
                SpaceReservation::Insufficient => {
                    return Err(ApiError::Insufficient(format!(
                        "Not enough spaces on lesson {}",
                        request.id
                    )));
                }
                SpaceReservation::NotFound => {
                    return Err(ApiError::NotFound(format!(
                        "Lesson {} not found",
                        request.id
                    )));
                }
            }
        }

        return Ok(Json(LessonsUpdated::new(reserved)));
    }

    let (Some(id), Some(attribute), Some(new_value)) = (
        body.get("id").and_then(Value::as_i64),
        body.get("attribute").and_then(Value::as_str),
        body.get("newValue"),
    ) else {
        return Err(ApiError::Validation(
            "Request must include spaceNeeded or id, attribute and newValue".into(),
        ));
    };

    apply_attribute_update(&state, &[id], attribute, new_value).await
}

/// PUT /updateLesson/{ids}/{attribute}/{newValue}
///
/// Path-parameter adapter over the same validation and store logic as
/// `PUT /updateLessons`. `ids` is a comma-separated integer list applied as
/// one batch write.
///
/// ### Responses
/// - `200 OK` — `{ "message": ..., "modifiedCount": n }`
/// - `400 Bad Request` — no valid ids, bad attribute or value
/// - `404 Not Found` — no lesson matched (or nothing changed)
/// - `500 Internal Server Error` — store failure
pub async fn update_lesson_by_path(
    State(state): State<AppState>,
    Path((ids, attribute, new_value)): Path<(String, String, String)>,
) -> Result<Json<LessonsUpdated>, ApiError> {
    let ids = common::parse_ids(&ids)?;
    apply_attribute_update(&state, &ids, &attribute, &Value::String(new_value)).await
}

/// Shared write path for both update forms: validate eagerly, then one
/// batch `$set` over all matching ids.
async fn apply_attribute_update(
    state: &AppState,
    ids: &[i64],
    attribute: &str,
    raw_value: &Value,
) -> Result<Json<LessonsUpdated>, ApiError> {
    common::validate_attribute(attribute)?;
    let value = common::coerce_value(attribute, raw_value)?;

    let modified = LessonRepository::set_attribute(state.store(), ids, attribute, value)
        .await
        .map_err(|e| ApiError::store("Failed to update lessons", e))?;

    if modified > 0 {
        Ok(Json(LessonsUpdated::new(modified)))
    } else {
        Err(ApiError::NotFound(
            "No lessons found or no changes made".into(),
        ))
    }
}
