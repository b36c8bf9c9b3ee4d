use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when Postgres answers, `degraded` when it does not.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always 200. The body reports whether Postgres answered.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match esdeco_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable during health check");
            false
        }
    };
    Json(HealthResponse::new(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_when_database_is_down() {
        let body = HealthResponse::new(false);
        assert_eq!(body.status, "degraded");
        assert!(!body.db_healthy);
        assert_eq!(HealthResponse::new(true).status, "ok");
    }
}
