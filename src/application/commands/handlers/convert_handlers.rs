//! Conversion Command Handlers

use chrono::Local;
use std::sync::Arc;

use crate::application::commands::convert_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{ConversionRecord, ConversionStatsPort, ConversionStorePort};
use crate::application::services::ChunkPipeline;
use crate::domain::voice::VoiceConfig;
use crate::domain::{
    assemble, char_count, estimate_duration, segment_text, word_count, AssembleMode, AudioResult,
    OutputNaming,
};

/// ConvertText Handler - 文本转语音
///
/// 短文本（字符数不超过 chunk_size）跳过分段直接合成一次；
/// 长文本分段后交给 ChunkPipeline，再按模式组装。
pub struct ConvertTextHandler {
    pipeline: ChunkPipeline,
    store: Arc<dyn ConversionStorePort>,
    stats: Arc<dyn ConversionStatsPort>,
    chunk_size: usize,
}

impl ConvertTextHandler {
    pub fn new(
        pipeline: ChunkPipeline,
        store: Arc<dyn ConversionStorePort>,
        stats: Arc<dyn ConversionStatsPort>,
        chunk_size: usize,
    ) -> Self {
        Self {
            pipeline,
            store,
            stats,
            chunk_size,
        }
    }

    /// 合成文本并组装结果，不做存储
    ///
    /// 空白文本返回 `Ok(None)`，不会调用提供方。第二个返回值是合成的片段数。
    pub async fn synthesize(
        &self,
        text: &str,
        config: &VoiceConfig,
        mode: AssembleMode,
    ) -> Result<Option<(AudioResult, usize)>, ApplicationError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        if char_count(text) <= self.chunk_size {
            let audio = self.pipeline.run_single(text, config).await?;
            return Ok(Some((AudioResult::Single(audio), 1)));
        }

        let chunks = segment_text(text, self.chunk_size)?;
        tracing::info!(
            chunks = chunks.len(),
            chunk_size = self.chunk_size,
            "Text split into chunks"
        );

        let audio_chunks = self.pipeline.run(&chunks, config).await?;
        Ok(Some((assemble(audio_chunks, mode), chunks.len())))
    }

    pub async fn handle(
        &self,
        cmd: ConvertTextCommand,
    ) -> Result<ConvertTextResponse, ApplicationError> {
        let chars = char_count(&cmd.text);
        let mut response = ConvertTextResponse {
            conversion_id: None,
            mode: cmd.mode,
            chunk_count: 0,
            char_count: chars,
            word_count: word_count(&cmd.text),
            estimated_duration: estimate_duration(&cmd.text, cmd.config.speed),
            total_size_bytes: 0,
            files: Vec::new(),
        };

        let Some((result, chunk_count)) =
            self.synthesize(&cmd.text, &cmd.config, cmd.mode).await?
        else {
            tracing::debug!("Empty text, nothing to convert");
            return Ok(response);
        };

        let naming = OutputNaming::new(&cmd.config, Local::now());
        let files = result.into_files(&naming);

        response.chunk_count = chunk_count;
        response.files = files
            .iter()
            .map(|f| ConvertedFile {
                filename: f.filename.clone(),
                size_bytes: f.size_bytes(),
            })
            .collect();
        response.total_size_bytes = response.files.iter().map(|f| f.size_bytes).sum();

        let conversion_id = self.store.put(ConversionRecord::new(files))?;
        response.conversion_id = Some(conversion_id);

        self.stats.record(chars as u64);

        tracing::info!(
            conversion_id = %conversion_id,
            chars,
            chunk_count,
            files = response.files.len(),
            total_size = response.total_size_bytes,
            mode = ?cmd.mode,
            "Conversion completed"
        );

        Ok(response)
    }
}
