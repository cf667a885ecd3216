//! Audio Queries - 音频文件查询

use uuid::Uuid;

/// 获取某次转换中的一个文件
#[derive(Debug, Clone)]
pub struct GetAudioFileQuery {
    pub conversion_id: Uuid,
    pub filename: String,
}

/// 获取音频响应
#[derive(Debug, Clone)]
pub struct GetAudioFileResponse {
    pub filename: String,
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
}
