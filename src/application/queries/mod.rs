//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod audio_queries;
mod catalog_queries;
mod stats_queries;
mod text_queries;

pub mod handlers;

pub use audio_queries::*;
pub use catalog_queries::*;
pub use stats_queries::*;
pub use text_queries::*;
