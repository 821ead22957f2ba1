//! End-to-end tests against a running MongoDB deployment.
//!
//! Ignored by default; run with `cargo test -- --ignored` after pointing
//! `DB_HOST`/`DB_NAME` (or the `.env.test` file) at a disposable database.
//! When `DB_NAME` is unset these tests use `webstore_test`.

mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use mongodb::bson::doc;
use serde_json::{Value, json};
use serial_test::serial;
use tower::util::ServiceExt;

use common::Config;
use db::models::Lesson;
use db::repositories::{LessonRepository, SpaceReservation};
use db::{LESSONS, Store};
use helpers::make_test_app;

async fn open_store() -> Store {
    if std::env::var("DB_NAME").is_err() {
        unsafe { std::env::set_var("DB_NAME", "webstore_test") };
    }
    let config = Config::init(".env.test");
    Store::connect(&config.connection_uri(), &config.db_name)
        .await
        .expect("these tests require a running MongoDB deployment")
}

/// Process-unique lesson id so suites can run against a shared database
/// without colliding.
fn unique_id() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_micros() as i64
        % 1_000_000_000
}

fn lesson(id: i64, spaces: i64) -> Lesson {
    Lesson {
        id,
        subject: "Maths".into(),
        location: "Hendon".into(),
        price: 100,
        spaces,
        image: Some("calculator.svg".into()),
    }
}

async fn seed(store: &Store, lessons: &[Lesson]) {
    store
        .collection::<Lesson>(LESSONS)
        .insert_many(lessons)
        .await
        .expect("Failed to seed lessons");
}

async fn cleanup(store: &Store, ids: &[i64]) {
    store
        .collection::<Lesson>(LESSONS)
        .delete_many(doc! { "id": { "$in": ids.to_vec() } })
        .await
        .expect("Failed to clean up lessons");
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB deployment"]
async fn lessons_listing_is_complete_and_idempotent() {
    let store = open_store().await;
    let (a, b) = (unique_id(), unique_id() + 1);
    seed(&store, &[lesson(a, 5), lesson(b, 3)]).await;

    let ids_of = |json: &Value| -> Vec<i64> {
        json.as_array()
            .unwrap()
            .iter()
            .map(|l| l["id"].as_i64().unwrap())
            .collect()
    };

    let mut listings = Vec::new();
    for _ in 0..2 {
        let app = make_test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/lessons")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        listings.push(body_json(response).await);
    }

    for listing in &listings {
        let ids = ids_of(listing);
        assert!(ids.contains(&a));
        assert!(ids.contains(&b));
    }
    // No intervening writes, so repeated listings agree.
    assert_eq!(listings[0], listings[1]);

    cleanup(&store, &[a, b]).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB deployment"]
async fn order_identities_are_distinct() {
    let _store = open_store().await;

    let mut order_ids = Vec::new();
    for _ in 0..2 {
        let app = make_test_app().await;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/newOrder")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({ "name": "Ada", "lessonIDs": [1001] }))
                            .unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Order successfully created");
        order_ids.push(json["orderId"].as_str().unwrap().to_owned());
    }

    assert_ne!(order_ids[0], order_ids[1]);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB deployment"]
async fn updating_unknown_lesson_yields_404() {
    let _store = open_store().await;

    let app = make_test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/updateLesson/999999999/subject/Chemistry")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No lessons found or no changes made");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB deployment"]
async fn path_update_applies_to_all_matching_ids() {
    let store = open_store().await;
    let (a, b) = (unique_id(), unique_id() + 1);
    seed(&store, &[lesson(a, 5), lesson(b, 3)]).await;

    let app = make_test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/updateLesson/{a},{b}/price/150"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["modifiedCount"], 2);

    for id in [a, b] {
        let updated = store
            .collection::<Lesson>(LESSONS)
            .find_one(doc! { "id": id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, 150);
    }

    cleanup(&store, &[a, b]).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB deployment"]
async fn batch_decrement_stops_at_first_insufficient_lesson() {
    let store = open_store().await;
    let id = unique_id();
    seed(&store, &[lesson(id, 2)]).await;

    let app = make_test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/updateLessons")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "spaceNeeded": [
                            { "id": id, "spaces": 1 },
                            { "id": id, "spaces": 5 },
                        ]
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The first entry was applied before the failure; the guard kept the
    // second from going through.
    let remaining = store
        .collection::<Lesson>(LESSONS)
        .find_one(doc! { "id": id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(remaining.spaces, 1);

    cleanup(&store, &[id]).await;
}

#[tokio::test]
#[serial]
#[ignore = "requires a running MongoDB deployment"]
async fn concurrent_decrements_never_drive_spaces_below_zero() {
    let store = open_store().await;
    let id = unique_id();
    seed(&store, &[lesson(id, 5)]).await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            LessonRepository::reserve_spaces(&store, id, 1).await.unwrap()
        }));
    }

    let mut reserved = 0;
    let mut insufficient = 0;
    for handle in handles {
        match handle.await.unwrap() {
            SpaceReservation::Reserved => reserved += 1,
            SpaceReservation::Insufficient => insufficient += 1,
            SpaceReservation::NotFound => panic!("seeded lesson disappeared"),
        }
    }

    assert_eq!(reserved, 5);
    assert_eq!(insufficient, 5);

    let final_state = store
        .collection::<Lesson>(LESSONS)
        .find_one(doc! { "id": id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(final_state.spaces, 0);

    cleanup(&store, &[id]).await;
}
