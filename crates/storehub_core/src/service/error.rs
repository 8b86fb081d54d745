//! Service-boundary error taxonomy.

use crate::model::company::CompanyId;
use crate::model::store::StoreId;
use crate::model::ValidationError;
use crate::repo::RepoError;
use crate::tenant::TenantNotEstablished;

/// Categorized failure returned by every service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed or missing required field; nothing reached storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Payload contradicts the request target (e.g. mismatched ids).
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("company not found: {0}")]
    CompanyNotFound(CompanyId),
    /// The store does not exist within the caller's tenant. Says nothing
    /// about other tenants.
    #[error("store not found: {0}")]
    StoreNotFound(StoreId),
    /// Tenant-scoped call made without a resolved tenant.
    #[error(transparent)]
    TenantNotEstablished(#[from] TenantNotEstablished),
    /// A foreign key target (the tenant company) does not exist.
    #[error("invalid reference: company {0} does not exist")]
    InvalidReference(CompanyId),
    /// Storage-layer failure.
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::CompanyNotFound(id) => Self::CompanyNotFound(id),
            RepoError::StoreNotFound(id) => Self::StoreNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Kind of outcome the transport layer maps to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    NotFound,
    BadRequest,
    TenantNotEstablished,
    Internal,
}

impl OutcomeKind {
    /// Conventional HTTP status code for this outcome.
    pub fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::TenantNotEstablished => 401,
            Self::Internal => 500,
        }
    }
}

impl ServiceError {
    pub fn outcome(&self) -> OutcomeKind {
        match self {
            Self::Validation(_) | Self::BadRequest(_) | Self::InvalidReference(_) => {
                OutcomeKind::BadRequest
            }
            Self::CompanyNotFound(_) | Self::StoreNotFound(_) => OutcomeKind::NotFound,
            Self::TenantNotEstablished(_) => OutcomeKind::TenantNotEstablished,
            Self::Repo(_) => OutcomeKind::Internal,
        }
    }
}
