use xtrawrkx_client::ApiError;
use xtrawrkx_core::CoreError;

/// Service-level error: transport failures, domain-rule violations, or
/// documents that do not decode into their model.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A classified client/transport error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A domain-level error from `xtrawrkx_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A backend document failed to decode into its typed model.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience alias for service return values.
pub type ServiceResult<T> = Result<T, ServiceError>;
