/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the statement store.
///
/// Schema violations never appear here: the validator gates every write
/// before it reaches the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Could not establish or verify the connection.
    #[error("failed to connect to MongoDB: {0}")]
    Connection(mongodb::error::Error),

    /// A remote operation failed after the connection was established.
    #[error("store operation failed: {0}")]
    Query(mongodb::error::Error),
}
