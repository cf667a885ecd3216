//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod conversion_stats;
mod conversion_store;
mod synthesizer;

pub use conversion_stats::{ConversionStatsPort, StatsSnapshot};
pub use conversion_store::{ConversionRecord, ConversionStorePort, StoreError};
pub use synthesizer::{SynthesisRequest, SynthesizerPort, TtsError};
