//! Text Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{EstimateTextQuery, EstimateTextResponse};
use crate::infrastructure::http::dto::{ApiResponse, EstimateTextRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 字数、预计时长和分段数
pub async fn estimate_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EstimateTextRequest>,
) -> Result<Json<ApiResponse<EstimateTextResponse>>, ApiError> {
    let result = state.estimate_handler.handle(EstimateTextQuery {
        text: req.text,
        speed: req.speed,
    })?;

    Ok(Json(ApiResponse::success(result)))
}
