//! Core domain logic for StoreHub, a multi-tenant company/store backend.
//! This crate is the single source of truth for tenant isolation and the
//! company/store lifecycle.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod request;
pub mod service;
pub mod tenant;

pub use config::{ConfigError, StoreHubConfig};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::company::{Company, CompanyId};
pub use model::store::{Store, StoreFields, StoreId};
pub use model::ValidationError;
pub use repo::company_repo::{CompanyRepository, SqliteCompanyRepository};
pub use repo::store_repo::{SqliteStoreRepository, StoreRepository};
pub use repo::{RepoError, RepoResult};
pub use request::{CompanyPayload, StoreCreatePayload, StoreUpdatePayload};
pub use service::company_service::{CompanyDeletion, CompanyService};
pub use service::error::{OutcomeKind, ServiceError};
pub use service::store_service::StoreService;
pub use tenant::{
    RequestHeaders, TenantContext, TenantNotEstablished, TenantResolver, DEFAULT_TENANT_HEADER,
};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
