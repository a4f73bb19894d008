use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dataquery_backend::{
    app::build_router,
    config::{mask_database_url, mask_secret, Config},
    db::connection::{create_pool, PoolConfig},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dataquery_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database_url = %mask_database_url(&config.database_url),
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_algorithm = ?config.jwt_algorithm,
        db_max_connections = config.db_max_connections,
        bind_addr = %config.bind_addr,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool = create_pool(&config.database_url, PoolConfig::from_config(&config)).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let addr = config.bind_addr;
    let app = build_router(AppState::new(pool, config));

    // Start server
    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
