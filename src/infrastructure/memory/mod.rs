//! Memory Layer - In-Memory State Management
//!
//! 实现 ConversionStore 和 ConversionStats，保存转换结果和会话统计

mod conversion_stats;
mod conversion_store;

pub use conversion_stats::InMemoryConversionStats;
pub use conversion_store::InMemoryConversionStore;
