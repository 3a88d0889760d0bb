/// Failure of a backend gateway call.
///
/// The gateway contract promises no more detail than "the call failed";
/// callers map the failure into their own error taxonomy.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("backend call timed out")]
    Timeout,
}
