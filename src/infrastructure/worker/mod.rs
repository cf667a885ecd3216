//! Worker Layer - Background Task Processing
//!
//! 实现 GcWorker，定期清理过期的转换结果

mod gc_worker;

pub use gc_worker::{GcWorker, GcWorkerConfig};
