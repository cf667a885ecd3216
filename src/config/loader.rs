//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TEXTVOICE_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TEXTVOICE_SERVER__PORT=8080`
/// - `TEXTVOICE_TTS__PROVIDER=fake`
/// - `TEXTVOICE_LIMITS__CHUNK_SIZE=300`
/// - `TEXTVOICE_PIPELINE__PACING_MS=1000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5070)?
        .set_default("tts.provider", "google")?
        .set_default("tts.url_template", "https://translate.google.{tld}")?
        .set_default("tts.timeout_secs", 30)?
        .set_default("limits.chunk_size", 500)?
        .set_default("limits.max_chars", 5000)?
        .set_default("pipeline.pacing_ms", 400)?
        .set_default("gc.enabled", true)?
        .set_default("gc.interval_secs", 600)?
        .set_default("gc.expire_secs", 3600)?
        .set_default("gc.max_conversions", 100)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 例如: TEXTVOICE_TTS__URL_TEMPLATE=http://localhost:9000
    builder = builder.add_source(
        Environment::with_prefix("TEXTVOICE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.tts.url_template.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS URL template cannot be empty".to_string(),
        ));
    }

    if config.limits.chunk_size == 0 {
        return Err(ConfigError::ValidationError(
            "Chunk size must be greater than 0".to_string(),
        ));
    }

    // 片段必须能整个交给提供方
    if config.limits.max_chars < config.limits.chunk_size {
        return Err(ConfigError::ValidationError(format!(
            "max_chars ({}) cannot be smaller than chunk_size ({})",
            config.limits.max_chars, config.limits.chunk_size
        )));
    }

    if config.gc.enabled && config.gc.interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "GC interval cannot be 0 when GC is enabled".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("TTS Provider: {:?}", config.tts.provider);
    tracing::info!("TTS URL Template: {}", config.tts.url_template);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("Chunk Size: {}", config.limits.chunk_size);
    tracing::info!("Provider Max Chars: {}", config.limits.max_chars);
    tracing::info!("Pacing: {}ms", config.pipeline.pacing_ms);
    tracing::info!("GC Enabled: {}", config.gc.enabled);
    if config.gc.enabled {
        tracing::info!("GC Interval: {}s", config.gc.interval_secs);
        tracing::info!("Conversion Expire: {}s", config.gc.expire_secs);
    }
    tracing::info!("Max Conversions: {}", config.gc.max_conversions);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
