//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /                 — status message
//!   GET    /customers        — list all customers
//!   GET    /customers/:id    — fetch one customer
//!   POST   /customers        — insert a customer
//!   PATCH  /customers/:id    — update a customer
//!   DELETE /customers/:id    — delete a customer
//!
//! Handlers are thin pass-throughs to `db::repository::customers`; any
//! repository failure becomes a bare 500.

pub mod handlers;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;
use handlers::AppState;

/// Build the application router around the given pool.
///
/// Taking the pool as an argument (rather than reaching for ambient state)
/// keeps tests free to pass in whatever pool they like.
pub fn router(pool: DbPool) -> Router {
    let state = AppState { pool };

    Router::new()
        .route("/", get(handlers::status))
        .route(
            "/customers",
            get(handlers::customers::list).post(handlers::customers::create),
        )
        .route(
            "/customers/:id",
            get(handlers::customers::get)
                .patch(handlers::customers::update)
                .delete(handlers::customers::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve the router until the process is stopped.
pub async fn serve(addr: &str, pool: DbPool) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(pool)).await
}
