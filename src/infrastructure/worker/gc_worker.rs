//! GC Worker - 定期清理过期的转换结果

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::ConversionStorePort;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct GcWorkerConfig {
    /// 清理间隔
    pub interval: Duration,
    /// 转换结果保留时间（秒）
    pub expire_secs: u64,
}

impl Default for GcWorkerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(600),
            expire_secs: 3600,
        }
    }
}

/// GC Worker
pub struct GcWorker {
    config: GcWorkerConfig,
    store: Arc<dyn ConversionStorePort>,
}

impl GcWorker {
    pub fn new(config: GcWorkerConfig, store: Arc<dyn ConversionStorePort>) -> Self {
        Self { config, store }
    }

    /// 执行一次清理，返回删除的数量
    pub fn run_once(&self) -> usize {
        let removed = self.store.remove_expired(self.config.expire_secs);
        tracing::debug!(
            removed,
            remaining = self.store.len(),
            "GC pass completed"
        );
        removed
    }

    /// 启动 Worker，永不返回
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.config.interval.as_secs(),
            expire_secs = self.config.expire_secs,
            "GcWorker started"
        );

        let mut ticker = tokio::time::interval(self.config.interval);
        // 第一次 tick 立即完成，跳过
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.run_once();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::application::ports::ConversionRecord;
    use crate::infrastructure::memory::InMemoryConversionStore;

    #[test]
    fn test_run_once_removes_only_expired() {
        let store = Arc::new(InMemoryConversionStore::new(10));
        let mut old = ConversionRecord::new(Vec::new());
        old.created_at = Utc::now() - chrono::Duration::hours(2);
        let old_id = store.put(old).unwrap();
        let fresh_id = store.put(ConversionRecord::new(Vec::new())).unwrap();

        let worker = GcWorker::new(GcWorkerConfig::default(), store.clone());

        assert_eq!(worker.run_once(), 1);
        assert!(store.get(old_id).is_err());
        assert!(store.get(fresh_id).is_ok());
    }

    #[tokio::test]
    async fn test_run_ticks_on_interval() {
        let store = Arc::new(InMemoryConversionStore::new(10));
        let mut old = ConversionRecord::new(Vec::new());
        old.created_at = Utc::now() - chrono::Duration::hours(2);
        store.put(old).unwrap();

        let worker = GcWorker::new(
            GcWorkerConfig {
                interval: Duration::from_millis(20),
                expire_secs: 3600,
            },
            store.clone(),
        );
        let handle = tokio::spawn(worker.run());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(store.is_empty());
        handle.abort();
    }
}
