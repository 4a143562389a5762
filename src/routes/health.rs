use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const HEALTHY: Self = Self { status: "healthy" };
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::HEALTHY
    }
}

pub async fn health_handler(_: super::HealthPath) -> impl IntoResponse {
    Json(HealthResponse::HEALTHY)
}
