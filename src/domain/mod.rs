//! Domain Layer - 领域层
//!
//! 纯逻辑，不做任何 I/O:
//! - Voice Context: 目录、音色档案、音效文本变换
//! - 文本分割与文本统计
//! - 音频组装

pub mod audio;
pub mod voice;

mod text_metrics;
mod text_segmenter;

pub use audio::{
    assemble, format_size, part_file_name, AssembleMode, AudioChunk, AudioFile, AudioResult,
    OutputNaming, AUDIO_CONTENT_TYPE,
};
pub use text_metrics::{
    char_count, estimate_duration, estimate_duration_secs, format_duration, word_count,
};
pub use text_segmenter::{segment_text, SegmentError, DEFAULT_CHUNK_SIZE};
