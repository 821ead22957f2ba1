//! Wire types for all outgoing JSON payloads.
//!
//! Success shapes match the public API contract exactly:
//!
//! ```json
//! { "message": "Order successfully created", "orderId": "65a1..." }
//! { "message": "Lessons updated successfully", "modifiedCount": 2 }
//! ```
//!
//! Every failure renders as `{ "error": "..." }` via [`error::ApiError`].

pub mod error;

pub use error::ApiError;

use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `201 Created` body for `POST /newOrder`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: String,
    pub order_id: String,
}

/// `200 OK` body for both lesson-update endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonsUpdated {
    pub message: String,
    pub modified_count: u64,
}

impl LessonsUpdated {
    pub fn new(modified_count: u64) -> Self {
        Self {
            message: "Lessons updated successfully".into(),
            modified_count,
        }
    }
}
