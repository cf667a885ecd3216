//! Stats Queries - 会话统计查询

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetStatsQuery;

#[derive(Debug, Clone, Serialize)]
pub struct GetStatsResponse {
    pub conversions: u64,
    pub characters: u64,
    /// 当前仍可下载的转换结果数
    pub stored_conversions: usize,
}
