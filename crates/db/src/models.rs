//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no behaviour.  JSON field
//! names match the column names, so the same structs travel over the HTTP
//! surface unchanged.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted customer row from the `clientes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Assigned by the database on insert, immutable afterwards.
    pub id: i32,
    pub nome: String,
    pub idade: i32,
    /// Two-letter state code.
    pub uf: String,
}

/// Customer fields as supplied by a client — everything but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub nome: String,
    pub idade: i32,
    pub uf: String,
}
