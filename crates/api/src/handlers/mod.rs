use axum::Json;
use serde_json::{json, Value};

use db::DbPool;

pub mod customers;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// GET / — liveness message, touches nothing.
pub async fn status() -> Json<Value> {
    Json(json!({ "message": "Funcionando!!!" }))
}
