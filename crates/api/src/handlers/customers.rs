use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::AppState;
use db::models::{Customer, CustomerInput};
use db::repository::customers as customer_repo;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, StatusCode> {
    match customer_repo::list_customers(&state.pool).await {
        Ok(rows) => Ok(Json(rows)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Responds 200 with the row, or 200 with `null` when the id is unknown.
pub async fn get(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<Customer>>, StatusCode> {
    match customer_repo::get_customer(&state.pool, id).await {
        Ok(row) => Ok(Json(row)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerInput>,
) -> Result<StatusCode, StatusCode> {
    match customer_repo::insert_customer(&state.pool, &payload).await {
        Ok(()) => Ok(StatusCode::CREATED),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Updating an id that does not exist still responds 200 — there is no
/// rows-affected check anywhere in the stack.
pub async fn update(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<CustomerInput>,
) -> Result<StatusCode, StatusCode> {
    match customer_repo::update_customer(&state.pool, id, &payload).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn delete(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, StatusCode> {
    match customer_repo::delete_customer(&state.pool, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
