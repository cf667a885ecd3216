//! Command Handlers

mod convert_handlers;
mod preview_handlers;

pub use convert_handlers::ConvertTextHandler;
pub use preview_handlers::PreviewVoiceHandler;
