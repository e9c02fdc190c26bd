use crate::error::AppError;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(state.controller.index().await?)
}

pub async fn about(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(state.controller.about().await?)
}

pub async fn contact(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(state.controller.contact().await?)
}

pub async fn error(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(state.controller.error().await?)
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.health().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "welcome-site",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "welcome-site",
                "error": e.to_string()
            })),
        ),
    }
}
