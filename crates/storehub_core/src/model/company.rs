//! Company (tenant) domain model.
//!
//! # Invariants
//! - `id` is generated once and never changes.
//! - `name` is trimmed, non-blank and bounded by `NAME_MAX_CHARS`.

use super::{normalize_required, ValidationError, NAME_MAX_CHARS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable company identifier. Doubles as the tenant identifier.
pub type CompanyId = Uuid;

/// A tenant that owns zero or more stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

impl Company {
    /// Creates a company with a freshly generated id.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a company with a caller-provided id.
    ///
    /// Used by seeding and tests where identity already exists.
    pub fn with_id(id: CompanyId, name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: normalize_company_name(name)?,
        })
    }

    /// Re-checks field rules on an already constructed value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        normalize_company_name(&self.name).map(|_| ())
    }
}

/// Normalizes a company name according to the entity rules.
pub fn normalize_company_name(name: &str) -> Result<String, ValidationError> {
    normalize_required("name", name, NAME_MAX_CHARS)
}
