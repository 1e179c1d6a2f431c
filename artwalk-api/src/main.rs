use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use artwalk_api::{app, AppState, AuthConfig};
use artwalk_core::repository::BookingRepository;
use artwalk_core::BookingService;
use artwalk_store::{app_config::Config, DbClient, InMemoryBookingRepository, PgBookingRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artwalk_api=debug,artwalk_core=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        "Starting artwalk API on port {} ({})",
        config.server.port,
        config.server.environment
    );

    let repo: Arc<dyn BookingRepository> = match DbClient::from_config(&config.database)
        .await
        .context("Failed to connect to Postgres")?
    {
        Some(db) => {
            db.migrate().await.context("Failed to run migrations")?;
            Arc::new(PgBookingRepository::new(db.pool.clone()))
        }
        None => {
            tracing::warn!("No database.url configured, bookings are kept in memory");
            Arc::new(InMemoryBookingRepository::new())
        }
    };

    let app_state = AppState {
        bookings: BookingService::new(repo, config.booking.clone()),
        auth: AuthConfig {
            admin_password: config.auth.admin_password.clone(),
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
        expose_error_details: !config.server.is_production(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
