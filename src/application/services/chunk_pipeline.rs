//! Chunk Pipeline - 片段流水线
//!
//! 按顺序对每个片段执行：音效变换 → 合成 → 收集结果。
//!
//! - 严格串行，两次提供方调用之间固定等待 `pacing`
//! - 任一片段失败立即中止，后续片段不再合成，已生成的音频丢弃

use std::time::Duration;

use crate::application::error::ApplicationError;
use crate::application::services::SynthesisAdapter;
use crate::domain::voice::{transform, VoiceConfig};
use crate::domain::AudioChunk;

/// 默认调用间隔（毫秒）
pub const DEFAULT_PACING_MS: u64 = 400;

/// 片段流水线
#[derive(Clone)]
pub struct ChunkPipeline {
    adapter: SynthesisAdapter,
    pacing: Duration,
}

impl ChunkPipeline {
    pub fn new(adapter: SynthesisAdapter, pacing: Duration) -> Self {
        Self { adapter, pacing }
    }

    /// 处理全部片段
    ///
    /// 成功时返回与输入等长、按序排列的音频；第 k 个片段失败时返回
    /// `SynthesisFailed { ordinal: k }`，k 从 1 开始。
    pub async fn run(
        &self,
        chunks: &[String],
        config: &VoiceConfig,
    ) -> Result<Vec<AudioChunk>, ApplicationError> {
        let total = chunks.len();
        let mut audio_chunks = Vec::with_capacity(total);

        for (index, chunk) in chunks.iter().enumerate() {
            let ordinal = index + 1;

            if index > 0 && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }

            let text = transform(chunk, config);
            let data = self.adapter.synthesize(&text, config).await.map_err(|e| {
                tracing::error!(ordinal, total, error = %e, "Chunk synthesis failed, aborting run");
                ApplicationError::synthesis_failed(ordinal, e.to_string())
            })?;

            tracing::debug!(ordinal, total, audio_size = data.len(), "Chunk synthesized");
            audio_chunks.push(AudioChunk { ordinal, data });
        }

        Ok(audio_chunks)
    }

    /// 短文本路径：跳过分段和节流，只合成一次
    pub async fn run_single(
        &self,
        text: &str,
        config: &VoiceConfig,
    ) -> Result<Vec<u8>, ApplicationError> {
        let transformed = transform(text, config);
        self.adapter
            .synthesize(&transformed, config)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Synthesis failed");
                ApplicationError::synthesis_failed(1, e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    use crate::application::services::DEFAULT_PROVIDER_MAX_CHARS;
    use crate::domain::voice::{SpeedOption, VoiceFilter};
    use crate::infrastructure::adapters::FakeTtsClient;

    fn pipeline(fake: Arc<FakeTtsClient>, pacing: Duration) -> ChunkPipeline {
        ChunkPipeline::new(
            SynthesisAdapter::new(fake, DEFAULT_PROVIDER_MAX_CHARS),
            pacing,
        )
    }

    fn chunks(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Parte número {}.", i)).collect()
    }

    #[tokio::test]
    async fn test_all_chunks_in_order() {
        let fake = Arc::new(FakeTtsClient::new());
        let pipeline = pipeline(fake.clone(), Duration::ZERO);

        let result = pipeline.run(&chunks(3), &VoiceConfig::default()).await.unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(
            result.iter().map(|c| c.ordinal).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        let texts: Vec<String> = fake.requests().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, chunks(3));
        assert_eq!(result[1].data, FakeTtsClient::audio_for(&fake.requests()[1]));
    }

    #[tokio::test]
    async fn test_abort_on_first_failure() {
        let fake = Arc::new(FakeTtsClient::new().fail_on_call(2, "rate limited"));
        let pipeline = pipeline(fake.clone(), Duration::ZERO);

        let err = pipeline
            .run(&chunks(5), &VoiceConfig::default())
            .await
            .unwrap_err();

        match err {
            ApplicationError::SynthesisFailed { ordinal, message } => {
                assert_eq!(ordinal, 2);
                assert!(message.contains("rate limited"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // 第 3..5 个片段不会被调用
        assert_eq!(fake.call_count(), 2);
    }

    #[tokio::test]
    async fn test_chunks_are_transformed_before_synthesis() {
        let fake = Arc::new(FakeTtsClient::new());
        let pipeline = pipeline(fake.clone(), Duration::ZERO);
        let config = VoiceConfig {
            speed: SpeedOption::Lenta,
            voice_filter: VoiceFilter::Normal,
            ..Default::default()
        };

        pipeline
            .run(&["um dois".to_string()], &config)
            .await
            .unwrap();

        assert_eq!(fake.requests()[0].text, "um .. dois");
        assert!(fake.requests()[0].slow);
    }

    #[tokio::test]
    async fn test_pacing_between_calls() {
        let fake = Arc::new(FakeTtsClient::new());
        let pacing = Duration::from_millis(30);
        let pipeline = pipeline(fake.clone(), pacing);

        let started = Instant::now();
        pipeline.run(&chunks(3), &VoiceConfig::default()).await.unwrap();

        // 3 个片段之间有 2 次等待
        assert!(started.elapsed() >= pacing * 2);
    }

    #[tokio::test]
    async fn test_empty_chunk_list_makes_no_calls() {
        let fake = Arc::new(FakeTtsClient::new());
        let pipeline = pipeline(fake.clone(), Duration::from_secs(10));

        let result = pipeline.run(&[], &VoiceConfig::default()).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_single_calls_once() {
        let fake = Arc::new(FakeTtsClient::new());
        let pipeline = pipeline(fake.clone(), Duration::from_secs(10));

        let started = Instant::now();
        let audio = pipeline
            .run_single("Texto curto.", &VoiceConfig::default())
            .await
            .unwrap();

        assert!(!audio.is_empty());
        assert_eq!(fake.call_count(), 1);
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_run_single_failure_reports_part_one() {
        let fake = Arc::new(FakeTtsClient::new().fail_on_call(1, "boom"));
        let pipeline = pipeline(fake, Duration::ZERO);

        let err = pipeline
            .run_single("Texto.", &VoiceConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::SynthesisFailed { ordinal: 1, .. }));
    }
}
