//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::services::{DEFAULT_PACING_MS, DEFAULT_PROVIDER_MAX_CHARS};
use crate::domain::DEFAULT_CHUNK_SIZE;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 语音合成提供方配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 分段与字符上限
    #[serde(default)]
    pub limits: LimitsConfig,

    /// 流水线配置
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// GC 配置
    #[serde(default)]
    pub gc: GcConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 合成提供方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    /// Google Translate 语音接口
    #[default]
    Google,
    /// 不联网的确定性实现，用于本地调试
    Fake,
}

/// TTS 提供方配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    #[serde(default)]
    pub provider: TtsProvider,

    /// 基础 URL 模板，`{tld}` 会被替换为音色的区域选择器
    #[serde(default = "default_tts_url_template")]
    pub url_template: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url_template() -> String {
    "https://translate.google.{tld}".to_string()
}

fn default_tts_timeout() -> u64 {
    30
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            url_template: default_tts_url_template(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

/// 字符上限配置
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// 单个片段的最大字符数，也是短文本直连的阈值
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// 提供方单次请求的字符上限
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_max_chars() -> usize {
    DEFAULT_PROVIDER_MAX_CHARS
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_chars: default_max_chars(),
        }
    }
}

/// 流水线配置
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// 两次提供方调用之间的固定间隔（毫秒）
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
}

fn default_pacing_ms() -> u64 {
    DEFAULT_PACING_MS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pacing_ms: default_pacing_ms(),
        }
    }
}

/// GC（垃圾回收）配置
///
/// 控制内存中转换结果的保留时间和数量
#[derive(Debug, Clone, Deserialize)]
pub struct GcConfig {
    /// 是否启用自动 GC
    #[serde(default = "default_gc_enabled")]
    pub enabled: bool,

    /// GC 间隔时间（秒）
    #[serde(default = "default_gc_interval")]
    pub interval_secs: u64,

    /// 转换结果过期时间（秒）
    #[serde(default = "default_expire")]
    pub expire_secs: u64,

    /// 最多保留的转换结果数
    #[serde(default = "default_max_conversions")]
    pub max_conversions: usize,
}

fn default_gc_enabled() -> bool {
    true
}

fn default_gc_interval() -> u64 {
    600 // 10 分钟
}

fn default_expire() -> u64 {
    3600 // 1 小时
}

fn default_max_conversions() -> usize {
    100
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            enabled: default_gc_enabled(),
            interval_secs: default_gc_interval(),
            expire_secs: default_expire(),
            max_conversions: default_max_conversions(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别，`RUST_LOG` 优先
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
