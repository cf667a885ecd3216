//! TextVoice - 文本转语音服务
//!
//! - Domain: voice/, 分段, 组装
//! - Application: commands, queries, services, ports
//! - Infrastructure: http, memory, worker, adapters

use std::sync::Arc;
use std::time::Duration;

use textvoice::application::{CatalogLimits, SynthesizerPort};
use textvoice::config::{load_config, print_config, TtsProvider};
use textvoice::infrastructure::adapters::{FakeTtsClient, GoogleTtsClient, GoogleTtsClientConfig};
use textvoice::infrastructure::http::{AppState, HttpServer, ServerConfig};
use textvoice::infrastructure::memory::{InMemoryConversionStats, InMemoryConversionStore};
use textvoice::infrastructure::worker::{GcWorker, GcWorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},textvoice={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("TextVoice - 文本转语音服务");
    print_config(&config);

    // 创建合成提供方
    let engine: Arc<dyn SynthesizerPort> = match config.tts.provider {
        TtsProvider::Google => {
            let client_config = GoogleTtsClientConfig::new(config.tts.url_template.clone())
                .with_timeout(config.tts.timeout_secs);
            Arc::new(GoogleTtsClient::new(client_config)?)
        }
        TtsProvider::Fake => {
            tracing::warn!("Using fake TTS provider, generated audio is not playable");
            Arc::new(FakeTtsClient::new())
        }
    };

    if !engine.health_check().await {
        tracing::warn!("TTS provider health check failed, conversions may fail");
    }

    // 内存中的转换结果与会话统计
    let store = Arc::new(InMemoryConversionStore::new(config.gc.max_conversions));
    let stats = Arc::new(InMemoryConversionStats::new());

    // 启动 GC Worker
    if config.gc.enabled {
        let worker = GcWorker::new(
            GcWorkerConfig {
                interval: Duration::from_secs(config.gc.interval_secs),
                expire_secs: config.gc.expire_secs,
            },
            store.clone(),
        );
        tokio::spawn(worker.run());
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        engine,
        store,
        stats,
        CatalogLimits {
            chunk_size: config.limits.chunk_size,
            max_chars: config.limits.max_chars,
        },
        Duration::from_millis(config.pipeline.pacing_ms),
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
