use mongodb::bson::Bson;

use crate::models::Order;
use crate::{Store, StoreError, ORDERS};

pub struct OrderRepository;

impl OrderRepository {
    /// Inserts an order document verbatim and returns the identity the
    /// store assigned to it (hex object id, or the caller-supplied `_id`
    /// rendered as a string).
    pub async fn insert(store: &Store, order: Order) -> Result<String, StoreError> {
        let result = store.collection::<Order>(ORDERS).insert_one(order).await?;

        match result.inserted_id {
            Bson::Null => Err(StoreError::Unacknowledged),
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Ok(other.to_string()),
        }
    }
}
