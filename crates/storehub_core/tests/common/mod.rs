#![allow(dead_code)]

use rusqlite::Connection;
use storehub_core::db::open_db_in_memory;
use storehub_core::{
    Company, CompanyId, CompanyRepository, SqliteCompanyRepository, SqliteStoreRepository, Store,
    StoreFields, StoreId, StoreRepository,
};
use uuid::Uuid;

pub const COMPANY_A: &str = "40a0d0a0-e1f2-3456-7890-000000000001";
pub const COMPANY_B: &str = "50a0d0a0-e1f2-3456-7890-000000000002";
pub const STORE_1A: &str = "60a0d0a0-e1f2-3456-7890-000000000001";
pub const STORE_2A: &str = "70a0d0a0-e1f2-3456-7890-000000000002";
pub const STORE_1B: &str = "80a0d0a0-e1f2-3456-7890-000000000003";

pub fn id(value: &str) -> Uuid {
    Uuid::parse_str(value).unwrap()
}

pub fn company_a() -> CompanyId {
    id(COMPANY_A)
}

pub fn company_b() -> CompanyId {
    id(COMPANY_B)
}

pub fn store_1a() -> StoreId {
    id(STORE_1A)
}

pub fn store_2a() -> StoreId {
    id(STORE_2A)
}

pub fn store_1b() -> StoreId {
    id(STORE_1B)
}

/// In-memory database with Company A (stores 1A, 2A) and Company B (1B).
pub fn seeded_db() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed(&conn);
    conn
}

pub fn seed(conn: &Connection) {
    let companies = SqliteCompanyRepository::try_new(conn).unwrap();
    companies
        .create_company(&Company::with_id(company_a(), "Company A").unwrap())
        .unwrap();
    companies
        .create_company(&Company::with_id(company_b(), "Company B").unwrap())
        .unwrap();

    let stores = SqliteStoreRepository::try_new(conn).unwrap();
    for (store_id, company_id, name, address) in [
        (store_1a(), company_a(), "Store 1A", "123 Main St"),
        (store_2a(), company_a(), "Store 2A", "456 Oak Ave"),
        (store_1b(), company_b(), "Store 1B", "789 Pine Rd"),
    ] {
        let fields = StoreFields::parse(name, Some(address)).unwrap();
        stores
            .create_store(&Store::with_id(store_id, company_id, fields))
            .unwrap();
    }
}

pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

pub fn store_name_in_db(conn: &Connection, store_id: StoreId) -> Option<String> {
    conn.query_row(
        "SELECT name FROM stores WHERE id = ?1;",
        [store_id.to_string()],
        |row| row.get(0),
    )
    .ok()
}
