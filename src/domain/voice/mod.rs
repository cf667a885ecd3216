//! Voice Context - 音色上下文
//!
//! 职责:
//! - 语言、语速、音色、滤镜、音调目录
//! - 音色档案解析（区域选择器、慢速偏置）
//! - 音效文本变换

mod catalog;
mod effects;
mod value_objects;

pub use catalog::{preview_text, resolve_voice_profile, voice_profiles, VoiceProfile, DEFAULT_REGION};
pub use effects::{apply_filter, apply_pitch, apply_speed, transform};
pub use value_objects::{Language, PitchOption, SpeedOption, VoiceConfig, VoiceFilter, VoiceType};
