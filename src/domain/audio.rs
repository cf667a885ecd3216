//! 音频组装
//!
//! 把按序排列的片段音频组装成多个独立文件，或者直接字节拼接成一个文件。
//!
//! 合并模式是实验性的：各片段是独立编码的 MP3 流，拼接后不会重新封装，
//! 重复的帧头和生硬的边界属于已知限制。

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::voice::VoiceConfig;

/// 输出文件扩展名
pub const AUDIO_EXTENSION: &str = "mp3";

/// 输出文件 MIME 类型
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// 单个片段的音频
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    /// 片段序号（从 1 开始）
    pub ordinal: usize,
    pub data: Vec<u8>,
}

/// 可下载的音频文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub filename: String,
    pub data: Vec<u8>,
}

impl AudioFile {
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// 组装模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssembleMode {
    /// 每个片段一个文件
    #[default]
    Separate,
    /// 字节拼接为一个文件（实验性）
    Merged,
}

/// 一次转换的音频结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioResult {
    /// 短文本，一次合成
    Single(Vec<u8>),
    /// 多个独立文件
    Multiple(Vec<AudioFile>),
    /// 字节拼接后的单个文件
    Merged(Vec<u8>),
}

impl AudioResult {
    /// 总字节数
    pub fn total_size(&self) -> usize {
        match self {
            Self::Single(data) | Self::Merged(data) => data.len(),
            Self::Multiple(files) => files.iter().map(AudioFile::size_bytes).sum(),
        }
    }

    /// 转换为带文件名的文件列表
    pub fn into_files(self, naming: &OutputNaming) -> Vec<AudioFile> {
        match self {
            Self::Single(data) => vec![AudioFile {
                filename: naming.single_file_name(),
                data,
            }],
            Self::Merged(data) => vec![AudioFile {
                filename: naming.merged_file_name(),
                data,
            }],
            Self::Multiple(files) => files,
        }
    }
}

/// 分段文件名：`audio_part_{NN}.mp3`，序号从 1 开始，至少两位
pub fn part_file_name(ordinal: usize) -> String {
    format!("audio_part_{:02}.{}", ordinal, AUDIO_EXTENSION)
}

/// 组装片段音频
///
/// 片段应当已经按序排列；组装过程不会修改任何字节。
pub fn assemble(chunks: Vec<AudioChunk>, mode: AssembleMode) -> AudioResult {
    match mode {
        AssembleMode::Separate => AudioResult::Multiple(
            chunks
                .into_iter()
                .map(|chunk| AudioFile {
                    filename: part_file_name(chunk.ordinal),
                    data: chunk.data,
                })
                .collect(),
        ),
        AssembleMode::Merged => {
            let total: usize = chunks.iter().map(|c| c.data.len()).sum();
            let mut merged = Vec::with_capacity(total);
            for chunk in chunks {
                merged.extend_from_slice(&chunk.data);
            }
            AudioResult::Merged(merged)
        }
    }
}

/// 单文件输出的命名规则
///
/// 文件名嵌入音色、滤镜、语速和时间戳
#[derive(Debug, Clone)]
pub struct OutputNaming {
    voice_type: &'static str,
    voice_filter: &'static str,
    speed: &'static str,
    timestamp: DateTime<Local>,
}

impl OutputNaming {
    pub fn new(config: &VoiceConfig, timestamp: DateTime<Local>) -> Self {
        Self {
            voice_type: config.voice_type.key(),
            voice_filter: config.voice_filter.key(),
            speed: config.speed.key(),
            timestamp,
        }
    }

    fn stamp(&self) -> String {
        self.timestamp.format("%Y%m%d_%H%M%S").to_string()
    }

    pub fn single_file_name(&self) -> String {
        format!(
            "audio_{}_{}_{}_{}.{}",
            self.voice_type,
            self.voice_filter,
            self.speed,
            self.stamp(),
            AUDIO_EXTENSION
        )
    }

    pub fn merged_file_name(&self) -> String {
        format!(
            "audio_completo_{}_{}_{}_{}.{}",
            self.voice_type,
            self.voice_filter,
            self.speed,
            self.stamp(),
            AUDIO_EXTENSION
        )
    }
}

/// 人类可读的文件大小
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let size = bytes as f64;
    if size < KB {
        format!("{} B", bytes)
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{:.1} MB", size / MB)
    }
}
