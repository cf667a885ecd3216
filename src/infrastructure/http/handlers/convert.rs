//! Convert Handlers

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::{ConvertTextCommand, PreviewVoiceCommand};
use crate::infrastructure::http::dto::{
    ApiResponse, ConvertRequest, ConvertResponse, PreviewRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 文本转语音
///
/// 请求在全部片段合成完之前不会返回
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ApiResponse<ConvertResponse>>, ApiError> {
    let cmd = ConvertTextCommand {
        text: req.text,
        config: req.voice,
        mode: req.mode,
    };

    let result = state.convert_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 试听当前音色配置，直接返回音频
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PreviewRequest>,
) -> Result<Response, ApiError> {
    let result = state
        .preview_handler
        .handle(PreviewVoiceCommand { config: req.voice })
        .await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, result.audio_data.len())
        .body(Body::from(result.audio_data))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}
