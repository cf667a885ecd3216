//! Synthesizer Port - 语音合成提供方抽象
//!
//! 外部 TTS 提供方被视为黑盒：文本 + 语言 + 区域 + 慢速标志 → 音频字节。
//! 这是核心流程中唯一的网络/I-O 边界，具体实现在 infrastructure/adapters 层。

use async_trait::async_trait;
use thiserror::Error;

/// 合成错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Text too long: {len} chars exceeds provider limit of {limit}")]
    TextTooLong { len: usize, limit: usize },
}

/// 合成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    /// 已经过音效变换的文本
    pub text: String,
    /// 语言代码（如 `pt`）
    pub language: String,
    /// 是否使用慢速
    pub slow: bool,
    /// 区域选择器（顶级域名，如 `com.br`）
    pub region: String,
}

/// Synthesizer Port
///
/// 每次调用只访问一次提供方，不做重试
#[async_trait]
pub trait SynthesizerPort: Send + Sync {
    /// 合成音频，返回 MP3 字节
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError>;

    /// 检查提供方是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
