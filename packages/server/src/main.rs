//! REST server for the user-record service.
//!
//! Reads `PORT` (default 8000) and `DATABASE_URL` at startup. With a database URL
//! the records live in Postgres; without one the server falls back to the
//! in-memory store, which is handy for development but forgets everything on
//! restart.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;

use crate::routes::AppState;
use crate::store::{MemUserStore, PgUserStore, UserStore};

mod db;
mod error;
mod models;
mod routes;
mod store;
mod users;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let store: Arc<dyn UserStore> = if std::env::var("DATABASE_URL").is_ok() {
        let pool = db::get_pool().await?;
        sqlx::migrate!("./migrations").run(pool).await?;
        Arc::new(PgUserStore::new(pool.clone()))
    } else {
        tracing::warn!("DATABASE_URL not set; using the in-memory store, records will not persist");
        Arc::new(MemUserStore::default())
    };

    let app = routes::router(AppState { store }).layer(CorsLayer::permissive());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
