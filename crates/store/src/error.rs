use estate_core::error::GatewayError;

/// Store-level error taxonomy.
///
/// Every gateway failure is caught at the store boundary, surfaced as an
/// error notice on the event bus, and re-signaled to the caller as one of
/// these variants. A missing entity on update/delete is a non-fatal
/// `Option`/`bool` result, not an error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to fetch properties")]
    FetchFailed(#[source] GatewayError),

    #[error("failed to create property")]
    CreateFailed(#[source] GatewayError),

    #[error("failed to update property")]
    UpdateFailed(#[source] GatewayError),

    #[error("failed to delete property")]
    DeleteFailed(#[source] GatewayError),

    #[error("failed to upload documents")]
    UploadFailed(#[source] GatewayError),

    #[error("failed to delete document")]
    DocumentDeleteFailed(#[source] GatewayError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;
