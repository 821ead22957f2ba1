use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};

use crate::models::Lesson;
use crate::{Store, StoreError, LESSONS};

/// Outcome of an atomic space reservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceReservation {
    /// The guard held and the decrement was applied.
    Reserved,
    /// The lesson exists but has fewer spaces than requested.
    Insufficient,
    /// No lesson with the given id.
    NotFound,
}

pub struct LessonRepository;

impl LessonRepository {
    /// Returns the full contents of the lesson collection in the store's
    /// natural order.
    pub async fn find_all(store: &Store) -> Result<Vec<Lesson>, StoreError> {
        let cursor = store.collection::<Lesson>(LESSONS).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Assigns `value` to `attribute` on every lesson whose `id` is in
    /// `ids`, as one batch write. Returns the number of documents actually
    /// modified. Attribute names are validated by the caller before this
    /// runs.
    pub async fn set_attribute(
        store: &Store,
        ids: &[i64],
        attribute: &str,
        value: Bson,
    ) -> Result<u64, StoreError> {
        let mut assignment = Document::new();
        assignment.insert(attribute, value);

        let result = store
            .collection::<Lesson>(LESSONS)
            .update_many(doc! { "id": { "$in": ids.to_vec() } }, doc! { "$set": assignment })
            .await?;
        Ok(result.modified_count)
    }

    /// Decrements `spaces` on one lesson by `requested`, atomically guarded
    /// by `spaces >= requested`. This is a single conditional update, so
    /// concurrent reservations against the same lesson can never drive
    /// `spaces` below zero. `requested` must be positive; the caller
    /// validates that.
    pub async fn reserve_spaces(
        store: &Store,
        id: i64,
        requested: i64,
    ) -> Result<SpaceReservation, StoreError> {
        let result = store
            .collection::<Lesson>(LESSONS)
            .update_one(
                doc! { "id": id, "spaces": { "$gte": requested } },
                doc! { "$inc": { "spaces": -requested } },
            )
            .await?;

        if result.modified_count > 0 {
            return Ok(SpaceReservation::Reserved);
        }

        // Guard failed: tell a missing lesson apart from one that is full.
        let exists = store
            .collection::<Lesson>(LESSONS)
            .find_one(doc! { "id": id })
            .await?;
        Ok(match exists {
            Some(_) => SpaceReservation::Insufficient,
            None => SpaceReservation::NotFound,
        })
    }
}
