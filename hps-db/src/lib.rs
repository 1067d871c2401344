//! In-memory SQLite database layer for hospital patient-satisfaction data.
//!
//! Loads the yearly CMS patient-satisfaction CSVs into a single in-memory
//! `facilities` table (the combined table) and exposes typed aggregation
//! queries for the dashboard and the CLI.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV text passed in by the caller: `include_str!` in the dashboard,
//!   `std::fs::read_to_string` in the CLI
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use hps_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_year(2016, "Facility Name,City,State\nMercy,Fresno,CA\n").unwrap();
//!
//! let by_year = db.query_facilities_by_year().unwrap();
//! assert_eq!(by_year[0].facilities, 1);
//! ```
//!
//! # Counting rule
//!
//! "Number of facilities" is always `COUNT(DISTINCT facility_name)` within the
//! grouping key, never a row count. Rows whose grouping key is `NULL` are left
//! out of the grouping.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the combined facility table.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_year`]
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
