use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::repositories::OrderRepository;
use serde_json::Value;

use crate::response::{ApiError, OrderCreated};
use crate::state::AppState;

/// POST /newOrder
///
/// Inserts the request body into the order collection verbatim. No schema
/// validation beyond the body being a JSON object; the store assigns the
/// identity.
///
/// ### Responses
/// - `201 Created` — `{ "message": "Order successfully created",
///   "orderId": "65a1..." }`
/// - `400 Bad Request` — body is valid JSON but not an object
/// - `500 Internal Server Error` — insert failed or was not acknowledged
pub async fn create_order(
    State(state): State<AppState>,
    Json(order): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let document = mongodb::bson::to_document(&order)
        .map_err(|_| ApiError::Validation("Order body must be a JSON object".into()))?;

    let order_id = OrderRepository::insert(state.store(), document)
        .await
        .map_err(|e| ApiError::store("Failed to insert order", e))?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order successfully created".into(),
            order_id,
        }),
    ))
}
