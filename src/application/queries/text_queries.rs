//! Text Queries - 文本统计查询

use serde::Serialize;

use crate::domain::voice::SpeedOption;

/// 估算文本的字数、时长和分段数
#[derive(Debug, Clone)]
pub struct EstimateTextQuery {
    pub text: String,
    pub speed: SpeedOption,
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateTextResponse {
    pub char_count: usize,
    pub word_count: usize,
    pub estimated_secs: u64,
    pub estimated_duration: String,
    /// 转换时会产生的片段数
    pub chunks_needed: usize,
}
