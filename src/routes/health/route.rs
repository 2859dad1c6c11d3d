use axum::{Json, Router, routing::get};

use crate::AppState;
use crate::routes::MessageResponse;

pub fn create_route() -> Router<AppState> {
    Router::new().route("/api/v1/ping", get(ping))
}

/// Public liveness probe
#[utoipa::path(
    get,
    path = "/api/v1/ping",
    responses(
        (status = 200, description = "Server is up", body = MessageResponse)
    ),
    tag = "System"
)]
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "pong! tms-server is up".to_string(),
    })
}
