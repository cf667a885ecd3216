//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;
use std::time::Duration;

use crate::application::{
    // Command handlers
    ConvertTextHandler, PreviewVoiceHandler,
    // Query handlers
    EstimateTextHandler, GetAudioFileHandler, GetCatalogHandler, GetStatsHandler,
    // Services
    ChunkPipeline, SynthesisAdapter,
    // Ports
    CatalogLimits, ConversionStatsPort, ConversionStorePort, SynthesizerPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub convert_handler: ConvertTextHandler,
    pub preview_handler: PreviewVoiceHandler,

    // ========== Query Handlers ==========
    pub catalog_handler: GetCatalogHandler,
    pub estimate_handler: EstimateTextHandler,
    pub stats_handler: GetStatsHandler,
    pub audio_handler: GetAudioFileHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// 同一个提供方实例被转换和试听共用
    pub fn new(
        engine: Arc<dyn SynthesizerPort>,
        store: Arc<dyn ConversionStorePort>,
        stats: Arc<dyn ConversionStatsPort>,
        limits: CatalogLimits,
        pacing: Duration,
    ) -> Self {
        let pipeline = ChunkPipeline::new(SynthesisAdapter::new(engine, limits.max_chars), pacing);

        Self {
            // Command handlers
            convert_handler: ConvertTextHandler::new(
                pipeline.clone(),
                store.clone(),
                stats.clone(),
                limits.chunk_size,
            ),
            preview_handler: PreviewVoiceHandler::new(pipeline),

            // Query handlers
            catalog_handler: GetCatalogHandler::new(limits.chunk_size, limits.max_chars),
            estimate_handler: EstimateTextHandler::new(limits.chunk_size),
            stats_handler: GetStatsHandler::new(stats, store.clone()),
            audio_handler: GetAudioFileHandler::new(store),
        }
    }
}
