//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：转换与试听

mod convert_commands;
mod preview_commands;

pub mod handlers;

pub use convert_commands::*;
pub use preview_commands::*;
