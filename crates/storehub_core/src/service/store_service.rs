//! Tenant-scoped store use-case service.
//!
//! # Responsibility
//! - Provide store CRUD for the tenant of the current request.
//! - Stamp the tenant id onto new stores; callers never supply it.
//!
//! # Invariants
//! - Every operation calls `TenantContext::require()` first and returns
//!   `TenantNotEstablished` before any repository access.
//! - A store outside the tenant yields `StoreNotFound`, the same outcome as
//!   a store that never existed.
//! - A dangling tenant company on create yields `InvalidReference`.

use crate::model::company::CompanyId;
use crate::model::store::{Store, StoreFields, StoreId};
use crate::repo::store_repo::StoreRepository;
use crate::repo::RepoError;
use crate::service::error::ServiceError;
use crate::tenant::TenantContext;
use log::{info, warn};

/// Use-case service for stores, scoped by `TenantContext`.
pub struct StoreService<R: StoreRepository> {
    repo: R,
}

impl<R: StoreRepository> StoreService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a store owned by the request tenant.
    pub fn create_store(
        &self,
        tenant: &TenantContext,
        name: &str,
        address: Option<&str>,
    ) -> Result<Store, ServiceError> {
        let company_id = require_tenant(tenant, "store_create")?;
        let store = Store::new(company_id, StoreFields::parse(name, address)?);

        self.repo.create_store(&store).map_err(|err| match err {
            RepoError::CompanyNotFound(id) => {
                warn!(
                    "event=store_create module=service status=error error_code=invalid_reference tenant={id}"
                );
                ServiceError::InvalidReference(id)
            }
            other => other.into(),
        })?;

        info!(
            "event=store_create module=service status=ok tenant={company_id} store={}",
            store.id
        );
        Ok(store)
    }

    /// Lists the stores of the request tenant.
    pub fn list_stores(&self, tenant: &TenantContext) -> Result<Vec<Store>, ServiceError> {
        let company_id = require_tenant(tenant, "store_list")?;
        Ok(self.repo.list_stores(company_id)?)
    }

    /// Gets one store of the request tenant.
    pub fn get_store(&self, tenant: &TenantContext, id: StoreId) -> Result<Store, ServiceError> {
        let company_id = require_tenant(tenant, "store_get")?;
        self.repo
            .get_store(company_id, id)?
            .ok_or(ServiceError::StoreNotFound(id))
    }

    /// Overwrites name and address of one store of the request tenant.
    pub fn update_store(
        &self,
        tenant: &TenantContext,
        id: StoreId,
        name: &str,
        address: Option<&str>,
    ) -> Result<Store, ServiceError> {
        let company_id = require_tenant(tenant, "store_update")?;
        let fields = StoreFields::parse(name, address)?;
        let store = self.repo.update_store(company_id, id, &fields)?;
        info!("event=store_update module=service status=ok tenant={company_id} store={id}");
        Ok(store)
    }

    /// Deletes one store of the request tenant. The company is unaffected.
    pub fn delete_store(&self, tenant: &TenantContext, id: StoreId) -> Result<(), ServiceError> {
        let company_id = require_tenant(tenant, "store_delete")?;
        self.repo.delete_store(company_id, id)?;
        info!("event=store_delete module=service status=ok tenant={company_id} store={id}");
        Ok(())
    }
}

fn require_tenant(tenant: &TenantContext, operation: &str) -> Result<CompanyId, ServiceError> {
    tenant.require().map_err(|err| {
        warn!("event=tenant_gate module=service status=rejected operation={operation}");
        err.into()
    })
}
