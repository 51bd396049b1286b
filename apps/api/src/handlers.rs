pub mod attr_types;
pub mod forms;
pub mod plugin_schemas;

use axum::Json;

use crate::dto::HealthResponse;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
