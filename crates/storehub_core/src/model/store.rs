//! Store domain model.
//!
//! # Invariants
//! - `company_id` is stamped from the resolved tenant at creation and is
//!   immutable afterwards; no setter exists.
//! - `name` is trimmed, non-blank and bounded by `NAME_MAX_CHARS`.
//! - `address` is optional; blank input is stored as `None`.

use super::company::CompanyId;
use super::{normalize_optional, normalize_required, ValidationError};
use super::{ADDRESS_MAX_CHARS, NAME_MAX_CHARS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable store identifier.
pub type StoreId = Uuid;

/// A store owned by exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub company_id: CompanyId,
    pub name: String,
    pub address: Option<String>,
}

/// Validated mutable fields of a store (everything but identity and owner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFields {
    pub name: String,
    pub address: Option<String>,
}

impl StoreFields {
    /// Normalizes and validates raw name/address input.
    pub fn parse(name: &str, address: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: normalize_required("name", name, NAME_MAX_CHARS)?,
            address: normalize_optional("address", address, ADDRESS_MAX_CHARS)?,
        })
    }
}

impl Store {
    /// Creates a store owned by `company_id` with a freshly generated id.
    pub fn new(company_id: CompanyId, fields: StoreFields) -> Self {
        Self::with_id(Uuid::new_v4(), company_id, fields)
    }

    /// Creates a store with a caller-provided id.
    pub fn with_id(id: StoreId, company_id: CompanyId, fields: StoreFields) -> Self {
        Self {
            id,
            company_id,
            name: fields.name,
            address: fields.address,
        }
    }

    /// Re-checks field rules on an already constructed value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        StoreFields::parse(&self.name, self.address.as_deref()).map(|_| ())
    }
}
