use crate::infrastructure::db::DbPool;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Liveness check that also pings the teacher database
pub async fn health_check(State(pool): State<DbPool>) -> impl IntoResponse {
    let (status, database) = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
    {
        Ok(_) => (StatusCode::OK, "connected"),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "disconnected")
        }
    };

    let label = if status.is_success() {
        "healthy"
    } else {
        "unhealthy"
    };

    (
        status,
        Json(json!({
            "status": label,
            "database": database
        })),
    )
}
