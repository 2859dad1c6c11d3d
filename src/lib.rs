use sea_orm::DatabaseConnection;

pub mod api_docs;
pub mod app;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod utils;

/// Shared handles passed to every handler through axum state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
