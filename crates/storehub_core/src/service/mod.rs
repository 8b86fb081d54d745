//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Turn repository outcomes into categorized `ServiceError`s for the
//!   transport layer.
//!
//! # Invariants
//! - `CompanyService` never consults tenant state.
//! - `StoreService` rejects an unresolved tenant before touching storage.

pub mod company_service;
pub mod error;
pub mod store_service;
