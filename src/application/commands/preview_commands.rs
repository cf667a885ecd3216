//! Preview Commands - 试听命令

use crate::domain::voice::VoiceConfig;

/// 试听命令
#[derive(Debug, Clone)]
pub struct PreviewVoiceCommand {
    pub config: VoiceConfig,
}

/// 试听响应
#[derive(Debug, Clone)]
pub struct PreviewVoiceResponse {
    pub text: String,
    pub audio_data: Vec<u8>,
    pub content_type: &'static str,
}
