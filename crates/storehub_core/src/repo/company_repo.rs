//! Company repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide unscoped CRUD over the `companies` table.
//! - Own the cascade delete of a company and all of its stores.
//!
//! # Invariants
//! - Write paths validate the entity before any SQL mutation.
//! - `delete_company_cascade` removes the company row and every dependent
//!   store row in one immediate transaction, or nothing at all.

use super::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use crate::model::company::{normalize_company_name, Company, CompanyId};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const COMPANY_SELECT_SQL: &str = "SELECT id, name FROM companies";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    ("companies", &["id", "name"]),
    ("stores", &["id", "company_id"]),
];

/// Repository interface for company CRUD operations.
pub trait CompanyRepository {
    /// Inserts a new company and returns its id.
    fn create_company(&self, company: &Company) -> RepoResult<CompanyId>;
    /// Lists every company, ordered by name then id.
    fn list_companies(&self) -> RepoResult<Vec<Company>>;
    /// Gets one company by id.
    fn get_company(&self, id: CompanyId) -> RepoResult<Option<Company>>;
    /// Returns whether a company with `id` exists.
    fn company_exists(&self, id: CompanyId) -> RepoResult<bool>;
    /// Overwrites the company name. Fails with `CompanyNotFound` when absent.
    fn update_company_name(&self, id: CompanyId, name: &str) -> RepoResult<Company>;
    /// Deletes the company and all its stores atomically.
    ///
    /// Returns the number of stores removed with it.
    fn delete_company_cascade(&self, id: CompanyId) -> RepoResult<usize>;
}

/// SQLite-backed company repository.
pub struct SqliteCompanyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompanyRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    fn create_company(&self, company: &Company) -> RepoResult<CompanyId> {
        company.validate()?;

        self.conn.execute(
            "INSERT INTO companies (id, name) VALUES (?1, ?2);",
            params![company.id.to_string(), company.name.as_str()],
        )?;

        Ok(company.id)
    }

    fn list_companies(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self.conn.prepare(&format!(
            "{COMPANY_SELECT_SQL} ORDER BY name COLLATE NOCASE ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut companies = Vec::new();
        while let Some(row) = rows.next()? {
            companies.push(parse_company_row(row)?);
        }
        Ok(companies)
    }

    fn get_company(&self, id: CompanyId) -> RepoResult<Option<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMPANY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_company_row(row)?));
        }
        Ok(None)
    }

    fn company_exists(&self, id: CompanyId) -> RepoResult<bool> {
        company_exists_on(self.conn, id)
    }

    fn update_company_name(&self, id: CompanyId, name: &str) -> RepoResult<Company> {
        let name = normalize_company_name(name)?;

        let changed = self.conn.execute(
            "UPDATE companies SET name = ?2 WHERE id = ?1;",
            params![id.to_string(), name.as_str()],
        )?;

        if changed == 0 {
            return Err(RepoError::CompanyNotFound(id));
        }

        Ok(Company { id, name })
    }

    fn delete_company_cascade(&self, id: CompanyId) -> RepoResult<usize> {
        let id_text = id.to_string();
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if !company_exists_on(&tx, id)? {
            return Err(RepoError::CompanyNotFound(id));
        }

        let removed_stores = tx.execute(
            "DELETE FROM stores WHERE company_id = ?1;",
            [id_text.as_str()],
        )?;
        tx.execute("DELETE FROM companies WHERE id = ?1;", [id_text.as_str()])?;

        tx.commit()?;
        Ok(removed_stores)
    }
}

/// Existence check usable on a plain connection or inside a transaction.
pub(crate) fn company_exists_on(conn: &Connection, id: CompanyId) -> RepoResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM companies WHERE id = ?1;",
            [id.to_string()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn parse_company_row(row: &Row<'_>) -> RepoResult<Company> {
    let id_text: String = row.get("id")?;
    let company = Company {
        id: parse_uuid(&id_text, "companies.id")?,
        name: row.get("name")?,
    };
    company.validate()?;
    Ok(company)
}
