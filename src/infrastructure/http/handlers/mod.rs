//! HTTP Handlers

mod audio;
mod catalog;
mod convert;
mod ping;
mod stats;
mod text;

pub use audio::*;
pub use catalog::*;
pub use convert::*;
pub use ping::*;
pub use stats::*;
pub use text::*;
