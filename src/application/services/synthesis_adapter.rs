//! Synthesis Adapter - 合成适配
//!
//! 把音色配置解析成提供方参数（语言代码、区域、慢速标志），然后调用一次提供方。

use std::sync::Arc;

use crate::application::ports::{SynthesisRequest, SynthesizerPort, TtsError};
use crate::domain::char_count;
use crate::domain::voice::{resolve_voice_profile, VoiceConfig};

/// 默认的提供方单次字符上限
pub const DEFAULT_PROVIDER_MAX_CHARS: usize = 5000;

/// 合成适配器
#[derive(Clone)]
pub struct SynthesisAdapter {
    engine: Arc<dyn SynthesizerPort>,
    max_chars: usize,
}

impl SynthesisAdapter {
    pub fn new(engine: Arc<dyn SynthesizerPort>, max_chars: usize) -> Self {
        Self { engine, max_chars }
    }

    /// 构建提供方请求
    ///
    /// 音色带有小于 1.0 的慢速偏置时，即使语速选项本身不慢也强制慢速
    pub fn build_request(&self, text: &str, config: &VoiceConfig) -> SynthesisRequest {
        let profile = resolve_voice_profile(config.language, config.voice_type);
        SynthesisRequest {
            text: text.to_string(),
            language: config.language.code().to_string(),
            slow: profile.effective_slow(config.speed),
            region: profile.region.to_string(),
        }
    }

    /// 合成已变换的文本
    ///
    /// 超出提供方字符上限时直接失败，不会调用提供方；错误原样返回，不重试。
    pub async fn synthesize(&self, text: &str, config: &VoiceConfig) -> Result<Vec<u8>, TtsError> {
        let len = char_count(text);
        if len > self.max_chars {
            return Err(TtsError::TextTooLong {
                len,
                limit: self.max_chars,
            });
        }

        let request = self.build_request(text, config);
        tracing::debug!(
            language = %request.language,
            region = %request.region,
            slow = request.slow,
            text_len = len,
            "Synthesizing text"
        );

        self.engine.synthesize(request).await
    }
}
