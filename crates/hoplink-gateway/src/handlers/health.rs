use axum::extract::State;
use axum::http::StatusCode;
use tokio::time::timeout;
use tracing::warn;

use crate::state::AppState;

/// `GET /health` — 200 "OK" when store and cache both answer a ping
/// within the probe timeout, 503 otherwise. Consumed by orchestration
/// liveness probes.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let deadline = state.probe_timeout();

    let store_ok = match timeout(deadline, state.store().ping()).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "health: store ping failed");
            false
        }
        Err(_) => {
            warn!("health: store ping timed out");
            false
        }
    };

    let cache_ok = match timeout(deadline, state.cache().ping()).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "health: cache ping failed");
            false
        }
        Err(_) => {
            warn!("health: cache ping timed out");
            false
        }
    };

    if store_ok && cache_ok {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    }
}
