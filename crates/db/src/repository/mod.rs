//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool`, issues exactly one parameterized
//! statement, and returns a `Result<T, DbError>`.  No business logic.

pub mod customers;
