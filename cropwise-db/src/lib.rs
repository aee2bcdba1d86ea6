//! In-memory SQLite crop catalog.
//!
//! Crop profiles are parsed from CSV (normally the catalog embedded in
//! `cropwise-core`) and stored in three tables so the views and the CLI can
//! ask for a single crop or the crops suited to a soil type without walking
//! the whole list.
//!
//! - `Rc<RefCell<Connection>>` wrapper for single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - Typed query methods returning [`cropwise_core::catalog::CropProfile`]
//!
//! # Usage
//!
//! ```rust
//! use cropwise_db::Database;
//! use cropwise_core::soil::SoilType;
//!
//! let db = Database::with_builtin_catalog().unwrap();
//! let rice = db.query_crop("Rice").unwrap().unwrap();
//! assert!(rice.prefers(SoilType::Clay));
//! let chalky = db.query_crops_for_soil(SoilType::Chalky).unwrap();
//! assert!(chalky.iter().all(|c| c.prefers(SoilType::Chalky)));
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the crop catalog.
///
/// Cheaply cloneable (via `Rc`); clones share one connection.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database loaded with the embedded crop catalog.
    pub fn with_builtin_catalog() -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_crops(cropwise_core::catalog::CROPS_CSV)?;
        Ok(db)
    }
}
