use thiserror::Error;

/// Service-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] obtasks_rfc::error::RfcError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
