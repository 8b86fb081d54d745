//! Company use-case service.
//!
//! # Responsibility
//! - Provide unscoped CRUD entry points over companies.
//! - Report cascade results of company deletion.
//!
//! # Invariants
//! - Names are validated before reaching the repository.
//! - Deletion is delegated to one atomic repository call; the service never
//!   removes stores and the company in separate steps.

use crate::model::company::{Company, CompanyId};
use crate::repo::company_repo::CompanyRepository;
use crate::service::error::ServiceError;
use log::info;

/// Summary of a completed company deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyDeletion {
    pub company_id: CompanyId,
    /// Stores removed together with the company.
    pub removed_stores: usize,
}

/// Use-case service for companies (tenants).
pub struct CompanyService<R: CompanyRepository> {
    repo: R,
}

impl<R: CompanyRepository> CompanyService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a company with a server-generated id.
    pub fn create_company(&self, name: &str) -> Result<Company, ServiceError> {
        let company = Company::new(name)?;
        self.repo.create_company(&company)?;
        info!(
            "event=company_create module=service status=ok company={}",
            company.id
        );
        Ok(company)
    }

    /// Lists all companies. Order is not part of the contract.
    pub fn list_companies(&self) -> Result<Vec<Company>, ServiceError> {
        Ok(self.repo.list_companies()?)
    }

    pub fn get_company(&self, id: CompanyId) -> Result<Company, ServiceError> {
        self.repo
            .get_company(id)?
            .ok_or(ServiceError::CompanyNotFound(id))
    }

    /// Overwrites the name of an existing company.
    pub fn update_company(&self, id: CompanyId, name: &str) -> Result<Company, ServiceError> {
        let company = self.repo.update_company_name(id, name)?;
        info!("event=company_update module=service status=ok company={id}");
        Ok(company)
    }

    /// Deletes a company together with all of its stores.
    pub fn delete_company(&self, id: CompanyId) -> Result<CompanyDeletion, ServiceError> {
        let removed_stores = self.repo.delete_company_cascade(id)?;
        info!(
            "event=company_delete module=service status=ok company={id} removed_stores={removed_stores}"
        );
        Ok(CompanyDeletion {
            company_id: id,
            removed_stores,
        })
    }
}
