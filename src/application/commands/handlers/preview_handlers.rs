//! Preview Command Handlers

use crate::application::commands::preview_commands::*;
use crate::application::error::ApplicationError;
use crate::application::services::ChunkPipeline;
use crate::domain::voice::preview_text;
use crate::domain::AUDIO_CONTENT_TYPE;

/// PreviewVoice Handler - 用固定示例文本试听当前音色配置
///
/// 结果不保存，也不计入统计
pub struct PreviewVoiceHandler {
    pipeline: ChunkPipeline,
}

impl PreviewVoiceHandler {
    pub fn new(pipeline: ChunkPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn handle(
        &self,
        cmd: PreviewVoiceCommand,
    ) -> Result<PreviewVoiceResponse, ApplicationError> {
        let text = preview_text(cmd.config.voice_type, cmd.config.voice_filter);
        let audio_data = self.pipeline.run_single(&text, &cmd.config).await?;

        tracing::debug!(
            voice_type = cmd.config.voice_type.key(),
            voice_filter = cmd.config.voice_filter.key(),
            audio_size = audio_data.len(),
            "Preview generated"
        );

        Ok(PreviewVoiceResponse {
            text,
            audio_data,
            content_type: AUDIO_CONTENT_TYPE,
        })
    }
}
