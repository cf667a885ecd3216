//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{ConvertTextResponse, ConvertedFile};
use crate::domain::voice::{SpeedOption, VoiceConfig};
use crate::domain::{format_size, AssembleMode};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Text DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct EstimateTextRequest {
    pub text: String,
    #[serde(default)]
    pub speed: SpeedOption,
}

// ============================================================================
// Convert DTOs
// ============================================================================

/// 转换请求
///
/// `voice` 中缺失或未知的选项使用默认值
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub mode: AssembleMode,
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub voice: VoiceConfig,
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub filename: String,
    pub size_bytes: usize,
    pub size: String,
    /// 下载地址
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub conversion_id: Option<Uuid>,
    pub mode: AssembleMode,
    pub chunk_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    pub estimated_duration: String,
    pub total_size_bytes: usize,
    pub total_size: String,
    pub files: Vec<FileResponse>,
}

impl From<ConvertTextResponse> for ConvertResponse {
    fn from(r: ConvertTextResponse) -> Self {
        let files = match r.conversion_id {
            Some(id) => r
                .files
                .into_iter()
                .map(|f| FileResponse::new(id, f))
                .collect(),
            None => Vec::new(),
        };

        Self {
            conversion_id: r.conversion_id,
            mode: r.mode,
            chunk_count: r.chunk_count,
            char_count: r.char_count,
            word_count: r.word_count,
            estimated_duration: r.estimated_duration,
            total_size_bytes: r.total_size_bytes,
            total_size: format_size(r.total_size_bytes),
            files,
        }
    }
}

impl FileResponse {
    fn new(conversion_id: Uuid, file: ConvertedFile) -> Self {
        Self {
            url: format!("/api/audio/{}/{}", conversion_id, file.filename),
            size: format_size(file.size_bytes),
            filename: file.filename,
            size_bytes: file.size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::{VoiceFilter, VoiceType};

    #[test]
    fn test_convert_request_defaults() {
        let req: ConvertRequest = serde_json::from_str(r#"{"text":"olá"}"#).unwrap();
        assert_eq!(req.voice, VoiceConfig::default());
        assert_eq!(req.mode, AssembleMode::Separate);
    }

    #[test]
    fn test_convert_request_unknown_options_fall_back() {
        let req: ConvertRequest = serde_json::from_str(
            r#"{"text":"olá","voice":{"voice_type":"masculina","voice_filter":"distorcido"},"mode":"merged"}"#,
        )
        .unwrap();
        assert_eq!(req.voice.voice_type, VoiceType::Masculina);
        assert_eq!(req.voice.voice_filter, VoiceFilter::Normal);
        assert_eq!(req.mode, AssembleMode::Merged);
    }

    #[test]
    fn test_file_urls() {
        let id = Uuid::new_v4();
        let response = ConvertResponse::from(ConvertTextResponse {
            conversion_id: Some(id),
            mode: AssembleMode::Separate,
            chunk_count: 1,
            char_count: 3,
            word_count: 1,
            estimated_duration: "0s".to_string(),
            total_size_bytes: 2048,
            files: vec![ConvertedFile {
                filename: "audio_part_01.mp3".to_string(),
                size_bytes: 2048,
            }],
        });

        assert_eq!(response.total_size, "2.0 KB");
        assert_eq!(
            response.files[0].url,
            format!("/api/audio/{}/audio_part_01.mp3", id)
        );
    }
}
