use std::sync::Arc;

use esdeco_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally and everything
/// else sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: esdeco_db::DbPool,
    /// Server configuration (JWT secret, CORS, timeouts).
    pub config: Arc<ServerConfig>,
    /// Outgoing mail transport. `None` when SMTP is not configured, in which
    /// case inquiry replies answer 503.
    pub mailer: Option<Arc<dyn Mailer>>,
}
