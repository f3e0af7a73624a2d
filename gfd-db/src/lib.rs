//! In-memory SQLite data provider for the global financial dashboard.
//!
//! This crate loads the two pre-cleaned economic CSV datasets (the World Bank
//! panel and the IMF exchange-rate table) plus the country-code whitelist
//! into an in-memory SQLite database and exposes typed, read-only query
//! methods for the chart builders.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via
//!   `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in consuming crates
//! - Typed query methods returning serializable structs for JSON export to
//!   the Plotly bridge
//!
//! The tables are written once at startup and never mutated afterwards; the
//! chart handlers only read. That load-then-freeze discipline is what makes
//! sharing one provider across all three charts safe.
//!
//! # Usage
//!
//! ```rust
//! use gfd_db::Database;
//!
//! let db = Database::new().unwrap();
//!
//! // Load CSV data (typically via include_str! in the consuming crate)
//! db.load_panel("Country Name,Series Name,1995,1996\nChina,GDP growth (annual %),10.9,9.9\n").unwrap();
//! db.load_exchange_rates("Date,Japanese Yen (JPY)\n3-Jan-1994,112.3\n").unwrap();
//!
//! // Query typed results
//! let years = db.query_panel_years().unwrap();
//! assert_eq!(years, vec![1995, 1996]);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the panel, exchange-rate, and
/// country-code tables.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
