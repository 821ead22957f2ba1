use thiserror::Error;

/// Failures raised at the store boundary.
///
/// Connection problems and query problems are kept apart so startup can
/// treat an unreachable deployment differently from a failed operation;
/// both end up as an HTTP 500 at the request boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The deployment could not be reached or the connection string was
    /// rejected. Raised by the single connect attempt at startup.
    #[error("failed to connect to the document store")]
    Unavailable(#[source] mongodb::error::Error),

    /// A read or write against an established connection failed.
    #[error("document store operation failed")]
    Query(#[from] mongodb::error::Error),

    /// The store did not acknowledge a write.
    #[error("write was not acknowledged by the store")]
    Unacknowledged,
}
