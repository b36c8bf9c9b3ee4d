use std::net::SocketAddr;
use std::sync::Arc;

use esdeco_api::bootstrap::ensure_bootstrap_admin;
use esdeco_api::config::ServerConfig;
use esdeco_api::router::build_app_router;
use esdeco_api::state::AppState;
use esdeco_db::DbPool;
use esdeco_mail::{EmailConfig, Mailer, SmtpMailer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let pool = connect_database().await;

    if let Some(seed) = &config.bootstrap_admin {
        ensure_bootstrap_admin(&pool, seed)
            .await
            .expect("Failed to create bootstrap admin");
    }

    let mailer = build_mailer();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Text logs by default, JSON when `LOG_FORMAT=json`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "esdeco_api=debug,tower_http=debug".into());
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Connect, verify, and migrate. Any failure aborts startup.
async fn connect_database() -> DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = esdeco_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    esdeco_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    esdeco_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    pool
}

/// SMTP mailer for inquiry replies, or `None` when `SMTP_HOST` is unset.
fn build_mailer() -> Option<Arc<dyn Mailer>> {
    let Some(email_config) = EmailConfig::from_env() else {
        tracing::warn!("SMTP_HOST not set, inquiry replies are disabled");
        return None;
    };
    let host = email_config.smtp_host.clone();
    let smtp = SmtpMailer::new(email_config).expect("Invalid SMTP configuration");
    tracing::info!(%host, "SMTP mailer configured");
    Some(Arc::new(smtp))
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
