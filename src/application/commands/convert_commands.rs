//! Conversion Commands - 文本转语音命令

use uuid::Uuid;

use crate::domain::voice::VoiceConfig;
use crate::domain::AssembleMode;

/// 转换文本命令
#[derive(Debug, Clone)]
pub struct ConvertTextCommand {
    pub text: String,
    pub config: VoiceConfig,
    pub mode: AssembleMode,
}

/// 输出文件信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub filename: String,
    pub size_bytes: usize,
}

/// 转换响应
///
/// 空白文本不会产生任何文件，`conversion_id` 为 None
#[derive(Debug, Clone)]
pub struct ConvertTextResponse {
    pub conversion_id: Option<Uuid>,
    pub mode: AssembleMode,
    /// 实际合成的片段数
    pub chunk_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    pub estimated_duration: String,
    pub total_size_bytes: usize,
    pub files: Vec<ConvertedFile>,
}
