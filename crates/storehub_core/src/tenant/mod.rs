//! Per-request tenant context and its resolution from request headers.
//!
//! # Responsibility
//! - Carry the tenant (company) id resolved for one request.
//! - Gate tenant-scoped operations on an established tenant.
//!
//! # Invariants
//! - A `TenantContext` is an immutable value. It is built once per request
//!   by `TenantResolver` and passed by reference into every scoped call.
//! - There is no process-wide or thread-local tenant state.

mod resolve;

pub use resolve::{RequestHeaders, TenantResolver, DEFAULT_TENANT_HEADER};

use crate::model::company::CompanyId;

/// Raised by tenant-scoped operations when no tenant was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tenant not established for this request")]
pub struct TenantNotEstablished;

/// Tenant identity for exactly one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TenantContext {
    company_id: Option<CompanyId>,
}

impl TenantContext {
    /// Context with no tenant; every scoped operation will be rejected.
    pub fn unresolved() -> Self {
        Self { company_id: None }
    }

    /// Context scoped to the given company.
    pub fn for_company(company_id: CompanyId) -> Self {
        Self {
            company_id: Some(company_id),
        }
    }

    /// Returns the tenant id, if one was resolved.
    pub fn company_id(&self) -> Option<CompanyId> {
        self.company_id
    }

    pub fn is_established(&self) -> bool {
        self.company_id.is_some()
    }

    /// Returns the tenant id or fails closed.
    pub fn require(&self) -> Result<CompanyId, TenantNotEstablished> {
        self.company_id.ok_or(TenantNotEstablished)
    }
}

#[cfg(test)]
mod tests {
    use super::{TenantContext, TenantNotEstablished};
    use uuid::Uuid;

    #[test]
    fn default_context_is_unresolved() {
        let context = TenantContext::default();
        assert_eq!(context, TenantContext::unresolved());
        assert!(!context.is_established());
        assert_eq!(context.require(), Err(TenantNotEstablished));
    }

    #[test]
    fn company_context_yields_its_id() {
        let id = Uuid::new_v4();
        let context = TenantContext::for_company(id);
        assert!(context.is_established());
        assert_eq!(context.company_id(), Some(id));
        assert_eq!(context.require(), Ok(id));
    }
}
