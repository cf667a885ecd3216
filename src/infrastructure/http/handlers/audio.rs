//! Audio Handlers

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::GetAudioFileQuery;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 下载转换生成的文件
pub async fn download_audio(
    State(state): State<Arc<AppState>>,
    Path((conversion_id, filename)): Path<(Uuid, String)>,
) -> Result<Response, ApiError> {
    let result = state.audio_handler.handle(GetAudioFileQuery {
        conversion_id,
        filename,
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, result.audio_data.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.filename),
        )
        .body(Body::from(result.audio_data))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}
