use animal_rescue_core::error::CoreError;

/// Errors surfaced by the services.
///
/// Store failures are carried verbatim; nothing is retried or rewritten.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Store failure: {0}")]
    Store(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
