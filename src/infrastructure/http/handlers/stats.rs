//! Stats Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetStatsQuery, GetStatsResponse};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<GetStatsResponse>> {
    Json(ApiResponse::success(state.stats_handler.handle(GetStatsQuery)))
}
