//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod audio_handlers;
mod catalog_handlers;
mod stats_handlers;
mod text_handlers;

pub use audio_handlers::*;
pub use catalog_handlers::*;
pub use stats_handlers::*;
pub use text_handlers::*;
