//! TextVoice - 文本转语音服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 目录、音色档案、音效文本变换
//! - 文本分段、文本统计、音频组装
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Synthesizer, ConversionStore, ConversionStats）
//! - Services: SynthesisAdapter, ChunkPipeline
//! - Commands: 转换、试听
//! - Queries: 目录、文本统计、会话统计、文件下载
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 转换结果与统计的内存实现
//! - Worker: 过期结果清理
//! - Adapters: Google TTS Client, Fake TTS Client

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
