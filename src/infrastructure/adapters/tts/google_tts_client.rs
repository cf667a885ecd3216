//! Google TTS Client - 调用 Google Translate 的语音接口
//!
//! 实现 SynthesizerPort trait
//!
//! 外部 API:
//! GET https://translate.google.{tld}/translate_tts
//!     ?ie=UTF-8&client=tw-ob&tl={lang}&ttsspeed={1|0.3}&q={text}
//! Response: audio/mpeg binary
//!
//! 区域选择器就是顶级域名，会间接改变口音。
//!
//! 接口拒绝过长的 `q`，所以一次合成会在词边界处拆成不超过
//! `GOOGLE_TTS_MAX_CHARS` 个字符的子请求，按顺序拼接返回的 MP3 字节。

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{SynthesisRequest, SynthesizerPort, TtsError};

/// 区域占位符
const TLD_PLACEHOLDER: &str = "{tld}";

const NORMAL_SPEED: &str = "1";
const SLOW_SPEED: &str = "0.3";

/// 单个子请求 `q` 的字符上限
const GOOGLE_TTS_MAX_CHARS: usize = 100;

const USER_AGENT: &str = concat!("textvoice/", env!("CARGO_PKG_VERSION"));

/// Google TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTtsClientConfig {
    /// 基础 URL 模板，`{tld}` 会被替换为区域选择器
    pub url_template: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GoogleTtsClientConfig {
    fn default() -> Self {
        Self {
            url_template: "https://translate.google.{tld}".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GoogleTtsClientConfig {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google TTS 客户端
pub struct GoogleTtsClient {
    client: Client,
    config: GoogleTtsClientConfig,
}

impl GoogleTtsClient {
    /// 创建新的客户端
    pub fn new(config: GoogleTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, TtsError> {
        Self::new(GoogleTtsClientConfig::default())
    }

    /// 区域对应的基础 URL
    fn base_url(&self, region: &str) -> String {
        self.config
            .url_template
            .replace(TLD_PLACEHOLDER, region)
            .trim_end_matches('/')
            .to_string()
    }

    /// 合成 URL
    fn tts_url(&self, region: &str) -> String {
        format!("{}/translate_tts", self.base_url(region))
    }

    /// 查询参数，`piece` 是本次子请求的文本
    fn query_params(request: &SynthesisRequest, piece: &str) -> [(&'static str, String); 5] {
        let speed = if request.slow { SLOW_SPEED } else { NORMAL_SPEED };
        [
            ("ie", "UTF-8".to_string()),
            ("client", "tw-ob".to_string()),
            ("tl", request.language.clone()),
            ("ttsspeed", speed.to_string()),
            ("q", piece.to_string()),
        ]
    }

    /// 请求一段文本的音频
    async fn fetch_piece(
        &self,
        url: &str,
        request: &SynthesisRequest,
        piece: &str,
    ) -> Result<Vec<u8>, TtsError> {
        let response = self
            .client
            .get(url)
            .query(&Self::query_params(request, piece))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS provider: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse("Empty audio body".to_string()));
        }

        Ok(audio_data)
    }
}

/// 在词边界处把文本拆成不超过 `GOOGLE_TTS_MAX_CHARS` 个字符的片段
///
/// 空白被规整为单个空格。单个词超长时按字符硬切。
fn split_text(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > GOOGLE_TTS_MAX_CHARS {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            pieces.extend(
                chars
                    .chunks(GOOGLE_TTS_MAX_CHARS)
                    .map(|c| c.iter().collect::<String>()),
            );
            continue;
        }

        if !current.is_empty() && current_len + 1 + word_len > GOOGLE_TTS_MAX_CHARS {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

#[async_trait]
impl SynthesizerPort for GoogleTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsError> {
        let url = self.tts_url(&request.region);

        tracing::debug!(
            url = %url,
            language = %request.language,
            slow = request.slow,
            text_len = request.text.len(),
            "Sending TTS request"
        );

        let pieces = split_text(&request.text);
        let mut audio_data = Vec::new();
        for piece in &pieces {
            let audio = self.fetch_piece(&url, &request, piece).await?;
            audio_data.extend_from_slice(&audio);
        }

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse("Empty audio body".to_string()));
        }

        tracing::info!(
            region = %request.region,
            pieces = pieces.len(),
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }

    async fn health_check(&self) -> bool {
        let probe = SynthesisRequest {
            text: "ok".to_string(),
            language: "en".to_string(),
            slow: false,
            region: "com".to_string(),
        };
        match self
            .client
            .get(self.tts_url(&probe.region))
            .query(&Self::query_params(&probe, &probe.text))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use axum::routing::get;
    use axum::Router;

    type SeenQueries = Arc<Mutex<Vec<String>>>;

    /// 本地替身：记录每个 `q`，返回 `[q]` 作为音频
    async fn stub_tts(
        State(seen): State<SeenQueries>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Vec<u8> {
        let q = params.get("q").cloned().unwrap_or_default();
        seen.lock().unwrap().push(q.clone());
        format!("[{q}]").into_bytes()
    }

    async fn spawn_stub() -> (String, SeenQueries) {
        let seen = SeenQueries::default();
        let app = Router::new()
            .route("/translate_tts", get(stub_tts))
            .with_state(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), seen)
    }

    fn sentence(words: usize) -> String {
        (0..words)
            .map(|i| format!("palavra{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_config_default() {
        let config = GoogleTtsClientConfig::default();
        assert_eq!(config.url_template, "https://translate.google.{tld}");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = GoogleTtsClientConfig::new("http://localhost:9000/").with_timeout(5);
        assert_eq!(config.url_template, "http://localhost:9000/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_region_is_substituted() {
        let client = GoogleTtsClient::with_default_config().unwrap();
        assert_eq!(
            client.tts_url("com.br"),
            "https://translate.google.com.br/translate_tts"
        );
    }

    #[test]
    fn test_template_without_placeholder() {
        let client = GoogleTtsClient::new(GoogleTtsClientConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(client.tts_url("pt"), "http://localhost:9000/translate_tts");
    }

    #[test]
    fn test_slow_flag_maps_to_speed_param() {
        let mut request = SynthesisRequest {
            text: "olá".to_string(),
            language: "pt".to_string(),
            slow: true,
            region: "com.br".to_string(),
        };
        let params = GoogleTtsClient::query_params(&request, &request.text);
        assert!(params.contains(&("ttsspeed", "0.3".to_string())));
        assert!(params.contains(&("tl", "pt".to_string())));

        request.slow = false;
        let params = GoogleTtsClient::query_params(&request, &request.text);
        assert!(params.contains(&("ttsspeed", "1".to_string())));
    }

    #[test]
    fn test_split_text_respects_limit_at_word_boundaries() {
        let text = sentence(60);
        let pieces = split_text(&text);

        assert!(pieces.len() > 1);
        assert!(pieces
            .iter()
            .all(|p| p.chars().count() <= GOOGLE_TTS_MAX_CHARS));
        assert_eq!(pieces.join(" "), text);
    }

    #[test]
    fn test_split_text_short_and_oversized_words() {
        assert_eq!(split_text("  olá \n mundo "), vec!["olá mundo".to_string()]);
        assert!(split_text("   ").is_empty());

        let long_word = "ç".repeat(GOOGLE_TTS_MAX_CHARS + 20);
        let pieces = split_text(&format!("antes {long_word} depois"));
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces[0], "antes");
        assert_eq!(pieces[1].chars().count(), GOOGLE_TTS_MAX_CHARS);
        assert_eq!(pieces[2].chars().count(), 20);
        assert_eq!(pieces[3], "depois");
    }

    #[tokio::test]
    async fn test_long_text_is_sent_in_pieces_and_concatenated() {
        let (url, seen) = spawn_stub().await;
        let client = GoogleTtsClient::new(GoogleTtsClientConfig::new(url)).unwrap();

        let text = sentence(60);
        let expected_pieces = split_text(&text);
        let audio = client
            .synthesize(SynthesisRequest {
                text: text.clone(),
                language: "pt".to_string(),
                slow: false,
                region: "com.br".to_string(),
            })
            .await
            .unwrap();

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen, expected_pieces);
        let expected: String = expected_pieces.iter().map(|p| format!("[{p}]")).collect();
        assert_eq!(audio, expected.into_bytes());
    }

    #[tokio::test]
    async fn test_short_text_is_one_request() {
        let (url, seen) = spawn_stub().await;
        let client = GoogleTtsClient::new(GoogleTtsClientConfig::new(url)).unwrap();

        let audio = client
            .synthesize(SynthesisRequest {
                text: "Olá, mundo!".to_string(),
                language: "pt".to_string(),
                slow: true,
                region: "pt".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(audio, "[Olá, mundo!]".as_bytes().to_vec());
    }
}
