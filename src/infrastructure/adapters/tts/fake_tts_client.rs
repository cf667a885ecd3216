//! Fake TTS Client - 用于测试的合成提供方
//!
//! 不发起任何网络请求，按请求内容返回确定的字节，并记录所有调用

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SynthesisRequest, SynthesizerPort, TtsError};

/// Fake TTS Client
///
/// 返回的音频字节由请求内容唯一决定；可以配置在第 N 次调用时失败
#[derive(Debug, Default)]
pub struct FakeTtsClient {
    /// 第几次调用失败（从 1 开始）及错误信息
    failure: Option<(usize, String)>,
    calls: Mutex<Vec<SynthesisRequest>>,
}

impl FakeTtsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 第 `call` 次调用返回 ServiceError
    pub fn fail_on_call(mut self, call: usize, message: impl Into<String>) -> Self {
        self.failure = Some((call, message.into()));
        self
    }

    /// 给定请求对应的音频字节
    pub fn audio_for(request: &SynthesisRequest) -> Vec<u8> {
        format!(
            "ID3|{}|{}|{}|{}",
            request.language,
            request.region,
            u8::from(request.slow),
            request.text
        )
        .into_bytes()
    }

    /// 已收到的全部请求（含失败的那次）
    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl SynthesizerPort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        let call = {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            calls.push(request.clone());
            calls.len()
        };

        tracing::debug!(
            call,
            text_len = request.text.len(),
            region = %request.region,
            "FakeTtsClient: returning deterministic audio"
        );

        match &self.failure {
            Some((fail_call, message)) if *fail_call == call => {
                Err(TtsError::ServiceError(message.clone()))
            }
            _ => Ok(Self::audio_for(&request)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            language: "pt".to_string(),
            slow: false,
            region: "com.br".to_string(),
        }
    }

    #[tokio::test]
    async fn test_same_request_same_bytes() {
        let client = FakeTtsClient::new();
        let a = client.synthesize(request("olá")).await.unwrap();
        let b = client.synthesize(request("olá")).await.unwrap();
        let c = client.synthesize(request("tchau")).await.unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_fails_on_configured_call() {
        let client = FakeTtsClient::new().fail_on_call(2, "quota");
        assert!(client.synthesize(request("1")).await.is_ok());
        assert!(matches!(
            client.synthesize(request("2")).await,
            Err(TtsError::ServiceError(msg)) if msg == "quota"
        ));
        assert!(client.synthesize(request("3")).await.is_ok());
    }
}
