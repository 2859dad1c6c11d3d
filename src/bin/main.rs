use std::net::SocketAddr;

use migration::{Migrator, MigratorTrait};
use tms_server::bootstrap::initialize_superadmin;
use tms_server::{AppState, app, config::APP_CONFIG, db, utils::tracing::init_standard_tracing};
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_standard_tracing(env!("CARGO_CRATE_NAME"));

    tracing::info!("Starting tms-server...");

    let db = db::connect(&APP_CONFIG).await?;

    if APP_CONFIG.migrate {
        Migrator::up(&db, None).await?;
        tracing::info!("Migrations completed. Exiting.");
        db.close().await?;
        return Ok(());
    }

    tracing::info!("Checking superadmin user...");
    if let Err(e) = initialize_superadmin(&db).await {
        tracing::error!("Failed to initialize superadmin user: {}", e);
        tracing::warn!("Continuing without superadmin initialization...");
    }

    let state = AppState { db: db.clone() };
    let app = app::create_app(state).await?;

    let http_address = format!("0.0.0.0:{}", APP_CONFIG.port);
    tracing::info!("HTTP server listening on {}", &http_address);

    let listener = tokio::net::TcpListener::bind(&http_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    db.close().await?;
    tracing::info!("Database connection closed, shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
