use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

/// Health check handler
/// Returns a simple JSON response indicating the server is running
pub async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "ok"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        let response = health_check().await.unwrap();

        assert_eq!(response.0["status"], "ok");
    }
}
