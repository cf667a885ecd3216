//! Conversion Stats Port - 会话统计
//!
//! 只增不减的累加器，由调用层持有。核心流程本身不读取也不依赖它。

/// 统计快照
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// 成功的转换次数
    pub conversions: u64,
    /// 已转换的字符总数
    pub characters: u64,
}

/// Conversion Stats Port
pub trait ConversionStatsPort: Send + Sync {
    /// 记录一次成功的转换
    fn record(&self, characters: u64);

    /// 读取当前统计
    fn snapshot(&self) -> StatsSnapshot;
}
