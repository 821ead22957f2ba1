use axum::{Router, middleware::from_fn};
use common::Config;
use db::Store;
use std::sync::OnceLock;
use tempfile::TempDir;

use api::{middleware::log_request, routes::routes, state::AppState};

/// Fixture bytes for the catalog asset served by the image tests.
pub const CALCULATOR_SVG: &[u8] =
    b"<svg xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"16\" height=\"16\"/></svg>";

static IMAGE_DIR: OnceLock<TempDir> = OnceLock::new();

/// Creates the shared image fixture directory once per test binary and
/// points `IMAGE_ROOT` at it. Must run before the first `Config::init`,
/// which is why callers are `#[serial]`.
fn image_root() -> &'static std::path::Path {
    IMAGE_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("Failed to create image fixture dir");
            std::fs::write(dir.path().join("calculator.svg"), CALCULATOR_SVG)
                .expect("Failed to write svg fixture");
            // A real non-svg file, to prove the guard fires regardless of
            // file existence.
            std::fs::write(dir.path().join("calculator.png"), b"not an svg")
                .expect("Failed to write png fixture");
            unsafe { std::env::set_var("IMAGE_ROOT", dir.path()) };
            dir
        })
        .path()
}

/// Builds the full application router backed by a lazily-connecting store
/// handle. Validation-only paths never reach the store, so these tests do
/// not need a running deployment; tests that do are `#[ignore]`d.
pub async fn make_test_app() -> Router {
    let _ = image_root();
    let config = Config::init(".env.test");

    let store = Store::open(&config.connection_uri(), &config.db_name)
        .await
        .expect("Failed to open store handle");

    routes(AppState::new(store)).layer(from_fn(log_request))
}
