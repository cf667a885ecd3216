//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Synthesizer、ConversionStore、ConversionStats）
//! - services: 合成适配与片段流水线
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

// Re-exports
pub use commands::{
    ConvertTextCommand,
    ConvertTextResponse,
    ConvertedFile,
    PreviewVoiceCommand,
    PreviewVoiceResponse,
    // Handlers
    handlers::{ConvertTextHandler, PreviewVoiceHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Conversion store
    ConversionRecord,
    ConversionStorePort,
    StoreError,
    // Stats
    ConversionStatsPort,
    StatsSnapshot,
    // Synthesizer
    SynthesisRequest,
    SynthesizerPort,
    TtsError,
};

pub use queries::{
    // Audio queries
    GetAudioFileQuery,
    GetAudioFileResponse,
    // Catalog queries
    CatalogEntry,
    CatalogLimits,
    CatalogResponse,
    GetCatalogQuery,
    LanguageVoices,
    // Stats queries
    GetStatsQuery,
    GetStatsResponse,
    // Text queries
    EstimateTextQuery,
    EstimateTextResponse,
    // Handlers
    handlers::{EstimateTextHandler, GetAudioFileHandler, GetCatalogHandler, GetStatsHandler},
};

pub use services::{ChunkPipeline, SynthesisAdapter, DEFAULT_PACING_MS, DEFAULT_PROVIDER_MAX_CHARS};
