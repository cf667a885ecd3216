//! 应用服务
//!
//! - SynthesisAdapter: 音色配置 → 提供方参数，单次合成
//! - ChunkPipeline: 串行处理片段，节流并在首个失败时中止

mod chunk_pipeline;
mod synthesis_adapter;

pub use chunk_pipeline::{ChunkPipeline, DEFAULT_PACING_MS};
pub use synthesis_adapter::{SynthesisAdapter, DEFAULT_PROVIDER_MAX_CHARS};
