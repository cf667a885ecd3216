//! Catalog Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CatalogResponse, GetCatalogQuery};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// 语言、语速、音色、滤镜、音调目录
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<ApiResponse<CatalogResponse>> {
    Json(ApiResponse::success(
        state.catalog_handler.handle(GetCatalogQuery),
    ))
}
