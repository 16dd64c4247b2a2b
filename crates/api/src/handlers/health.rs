use crate::dto::HealthResponse;
use axum::Json;
use chrono::Utc;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "ferrule-api".to_string(),
        timestamp: Utc::now(),
    })
}
