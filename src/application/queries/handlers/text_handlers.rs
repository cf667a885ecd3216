//! Text Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::text_queries::{EstimateTextQuery, EstimateTextResponse};
use crate::domain::{
    char_count, estimate_duration_secs, format_duration, segment_text, word_count,
};

/// EstimateText Handler - 转换前的文本统计
pub struct EstimateTextHandler {
    chunk_size: usize,
}

impl EstimateTextHandler {
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    pub fn handle(&self, query: EstimateTextQuery) -> Result<EstimateTextResponse, ApplicationError> {
        let chars = char_count(&query.text);
        let secs = estimate_duration_secs(&query.text, query.speed);

        // 与转换用例的分支保持一致
        let chunks_needed = if query.text.trim().is_empty() {
            0
        } else if chars <= self.chunk_size {
            1
        } else {
            segment_text(&query.text, self.chunk_size)?.len()
        };

        Ok(EstimateTextResponse {
            char_count: chars,
            word_count: word_count(&query.text),
            estimated_secs: secs,
            estimated_duration: format_duration(secs),
            chunks_needed,
        })
    }
}
