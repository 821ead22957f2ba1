//! Request logging middleware.
//!
//! An ordered wrapper around the inner service: one structured event when a
//! request arrives, one after the response is produced. It never alters the
//! response content or status. This replaces the original design's
//! monkey-patched response-send hook with an explicit `from_fn` layer.
//!
//! ### Usage
//! ```rust,ignore
//! use axum::{Router, middleware::from_fn};
//! use api::middleware::log_request;
//!
//! let app = Router::new().layer(from_fn(log_request));
//! ```

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    info!(method = %method, path = %path, "Incoming request");

    let start = Instant::now();
    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
