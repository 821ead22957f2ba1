use serde::{Deserialize, Serialize};

/// A catalog item with bookable capacity, stored in the `lessons`
/// collection.
///
/// `id` is the application-level key used by every update operation; the
/// store's internal `_id` is never exposed. Lessons are mutated in place by
/// the update endpoints and are never created or deleted through this API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique application-level key.
    pub id: i64,
    pub subject: String,
    pub location: String,
    /// Non-negative price in whole currency units.
    pub price: i64,
    /// Remaining bookable capacity; decremented when orders reserve spaces
    /// and never allowed below zero.
    pub spaces: i64,
    /// Optional image reference served under `/images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
