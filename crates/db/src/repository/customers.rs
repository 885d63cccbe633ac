//! Customer CRUD operations against the `clientes` table.
//!
//! Values always travel as bound parameters (`$1`, `$2`, …), never spliced
//! into the SQL text.  There are no transactions and no rows-affected
//! checks: updating or deleting an id that does not exist completes
//! normally with zero rows touched.

use sqlx::PgPool;

use crate::models::{Customer, CustomerInput};
use crate::DbError;

/// Return every customer currently in the table.  Order is unspecified.
pub async fn list_customers(pool: &PgPool) -> Result<Vec<Customer>, DbError> {
    let rows = sqlx::query_as::<_, Customer>("SELECT id, nome, idade, uf FROM clientes")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Fetch a single customer by primary key.
///
/// `id` is the primary key, so this yields at most one row.
pub async fn get_customer(pool: &PgPool, id: i32) -> Result<Option<Customer>, DbError> {
    let row = sqlx::query_as::<_, Customer>("SELECT id, nome, idade, uf FROM clientes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Insert a new customer.  The id is assigned by the database.
pub async fn insert_customer(pool: &PgPool, customer: &CustomerInput) -> Result<(), DbError> {
    sqlx::query("INSERT INTO clientes (nome, idade, uf) VALUES ($1, $2, $3)")
        .bind(&customer.nome)
        .bind(customer.idade)
        .bind(&customer.uf)
        .execute(pool)
        .await?;

    Ok(())
}

/// Overwrite the fields of the customer with the given id.
pub async fn update_customer(
    pool: &PgPool,
    id: i32,
    customer: &CustomerInput,
) -> Result<(), DbError> {
    sqlx::query("UPDATE clientes SET nome = $1, idade = $2, uf = $3 WHERE id = $4")
        .bind(&customer.nome)
        .bind(customer.idade)
        .bind(&customer.uf)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete the customer with the given id.
pub async fn delete_customer(pool: &PgPool, id: i32) -> Result<(), DbError> {
    sqlx::query("DELETE FROM clientes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
