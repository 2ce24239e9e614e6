// src/main.rs
use hr_backend::api::{create_router, AppState};
use hr_backend::config::AppConfig;
use hr_backend::db::{create_db_pool, run_migrations};
use hr_backend::logging::init_tracing;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Starting HR backend server...");

    let app_config = AppConfig::from_env()?;
    info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    let db_pool = create_db_pool(&app_config).await?;
    info!("Database connection established");

    if app_config.run_migrations {
        run_migrations(&db_pool).await?;
    }

    let app_state = AppState::new(db_pool, &app_config)?;
    let app_router = create_router(app_state);

    let listener = TcpListener::bind(app_config.server_addr()).await?;
    info!(addr = %app_config.server_addr(), "Listening");
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
