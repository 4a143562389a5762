use axum_extra::routing::TypedPath;
use serde::Deserialize;

pub mod health;

#[derive(TypedPath, Deserialize)]
#[typed_path("/health")]
pub struct HealthPath;
