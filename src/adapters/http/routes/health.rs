use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    store: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /api/health
/// Liveness plus which store backend was configured. Does not touch the store.
async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        store: app_state.config.store.kind(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;
    use crate::test_utils::TestAppStateBuilder;

    #[tokio::test]
    async fn reports_unconfigured_store() {
        let app_state = TestAppStateBuilder::new().unconfigured().build();
        let server = TestServer::new(router().with_state(app_state)).unwrap();

        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok", "store": "unconfigured" }));
    }
}
