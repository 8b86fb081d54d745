//! Tenant-scoped store repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide store CRUD where every statement is filtered by the owning
//!   company id.
//! - Validate the company reference when a store is created.
//!
//! # Invariants
//! - No method reads or writes a store row without `company_id = ?` in its
//!   `WHERE` clause.
//! - A store of another company behaves exactly like a missing store:
//!   `None` from reads, `StoreNotFound` from writes.
//! - `company_id` is written once by `create_store` and never updated.

use super::company_repo::company_exists_on;
use super::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use crate::model::company::CompanyId;
use crate::model::store::{Store, StoreFields, StoreId};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const STORE_SELECT_SQL: &str = "SELECT id, company_id, name, address FROM stores";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("companies", &["id"]),
    ("stores", &["id", "company_id", "name", "address"]),
];

/// Repository interface for tenant-scoped store operations.
pub trait StoreRepository {
    /// Inserts `store` after checking that its company exists.
    ///
    /// Fails with `CompanyNotFound` when the reference is dangling.
    fn create_store(&self, store: &Store) -> RepoResult<StoreId>;
    /// Lists the stores owned by `company_id`, ordered by name then id.
    fn list_stores(&self, company_id: CompanyId) -> RepoResult<Vec<Store>>;
    /// Gets one store when it exists and is owned by `company_id`.
    fn get_store(&self, company_id: CompanyId, id: StoreId) -> RepoResult<Option<Store>>;
    /// Overwrites name and address of a store owned by `company_id`.
    fn update_store(
        &self,
        company_id: CompanyId,
        id: StoreId,
        fields: &StoreFields,
    ) -> RepoResult<Store>;
    /// Deletes a store owned by `company_id`.
    fn delete_store(&self, company_id: CompanyId, id: StoreId) -> RepoResult<()>;
}

/// SQLite-backed store repository.
pub struct SqliteStoreRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStoreRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl StoreRepository for SqliteStoreRepository<'_> {
    fn create_store(&self, store: &Store) -> RepoResult<StoreId> {
        store.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !company_exists_on(&tx, store.company_id)? {
            return Err(RepoError::CompanyNotFound(store.company_id));
        }

        tx.execute(
            "INSERT INTO stores (id, company_id, name, address) VALUES (?1, ?2, ?3, ?4);",
            params![
                store.id.to_string(),
                store.company_id.to_string(),
                store.name.as_str(),
                store.address.as_deref(),
            ],
        )?;

        tx.commit()?;
        Ok(store.id)
    }

    fn list_stores(&self, company_id: CompanyId) -> RepoResult<Vec<Store>> {
        let mut stmt = self.conn.prepare(&format!(
            "{STORE_SELECT_SQL}
             WHERE company_id = ?1
             ORDER BY name COLLATE NOCASE ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([company_id.to_string()])?;
        let mut stores = Vec::new();
        while let Some(row) = rows.next()? {
            stores.push(parse_store_row(row)?);
        }
        Ok(stores)
    }

    fn get_store(&self, company_id: CompanyId, id: StoreId) -> RepoResult<Option<Store>> {
        let mut stmt = self.conn.prepare(&format!(
            "{STORE_SELECT_SQL}
             WHERE id = ?1
               AND company_id = ?2;"
        ))?;
        let mut rows = stmt.query(params![id.to_string(), company_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_store_row(row)?));
        }
        Ok(None)
    }

    fn update_store(
        &self,
        company_id: CompanyId,
        id: StoreId,
        fields: &StoreFields,
    ) -> RepoResult<Store> {
        let store = Store::with_id(id, company_id, fields.clone());
        store.validate()?;

        let changed = self.conn.execute(
            "UPDATE stores
             SET
                name = ?3,
                address = ?4
             WHERE id = ?1
               AND company_id = ?2;",
            params![
                id.to_string(),
                company_id.to_string(),
                store.name.as_str(),
                store.address.as_deref(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::StoreNotFound(id));
        }

        Ok(store)
    }

    fn delete_store(&self, company_id: CompanyId, id: StoreId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM stores WHERE id = ?1 AND company_id = ?2;",
            params![id.to_string(), company_id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::StoreNotFound(id));
        }

        Ok(())
    }
}

fn parse_store_row(row: &Row<'_>) -> RepoResult<Store> {
    let id_text: String = row.get("id")?;
    let company_text: String = row.get("company_id")?;
    let store = Store {
        id: parse_uuid(&id_text, "stores.id")?,
        company_id: parse_uuid(&company_text, "stores.company_id")?,
        name: row.get("name")?,
        address: row.get("address")?,
    };
    store.validate()?;
    Ok(store)
}
