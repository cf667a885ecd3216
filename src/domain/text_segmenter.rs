//! 文本分割器
//!
//! 将任意长度的文本切分为不超过最大字符数的片段，优先在段落边界切分，
//! 段落过长时退化为按句子切分。

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// 默认片段最大字符数
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// 段落之间的分隔符（参与长度计算）
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// 句子之间的分隔符
const SENTENCE_SEPARATOR: &str = " ";

static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r\f\v]*\n").expect("valid regex"));

/// 分割错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("max_length must be positive")]
    InvalidMaxLength,
}

/// 检查是否为句末标点
#[inline]
fn is_terminal_punctuation(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// 贪心打包器：在不超过 max_length 的前提下把片段拼接到缓冲区
struct Packer<'a> {
    max_length: usize,
    separator: &'a str,
    buffer: String,
    buffer_len: usize,
    chunks: Vec<String>,
}

impl<'a> Packer<'a> {
    fn new(max_length: usize, separator: &'a str) -> Self {
        Self {
            max_length,
            separator,
            buffer: String::new(),
            buffer_len: 0,
            chunks: Vec::new(),
        }
    }

    fn fits(&self, piece_len: usize) -> bool {
        if self.buffer.is_empty() {
            return piece_len <= self.max_length;
        }
        self.buffer_len + char_len(self.separator) + piece_len <= self.max_length
    }

    fn push(&mut self, piece: &str) {
        let piece_len = char_len(piece);
        if !self.fits(piece_len) {
            self.flush();
        }
        if !self.buffer.is_empty() {
            self.buffer.push_str(self.separator);
            self.buffer_len += char_len(self.separator);
        }
        self.buffer.push_str(piece);
        self.buffer_len += piece_len;
    }

    /// 直接输出一个独立片段（先刷出缓冲区以保持顺序）
    fn emit(&mut self, chunk: String) {
        self.flush();
        self.chunks.push(chunk);
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.chunks.push(std::mem::take(&mut self.buffer));
            self.buffer_len = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}

/// 按句末标点拆分段落，每个句子重新补上句号
fn split_sentences(paragraph: &str) -> Vec<String> {
    paragraph
        .split(is_terminal_punctuation)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
        .collect()
}

/// 句子级分割：用于单个段落超过限制的情况
///
/// 单个句子本身超过限制时作为独立片段输出，不做截断
fn segment_sentences(paragraph: &str, max_length: usize) -> Vec<String> {
    let mut packer = Packer::new(max_length, SENTENCE_SEPARATOR);

    for sentence in split_sentences(paragraph) {
        if char_len(&sentence) > max_length {
            tracing::debug!(
                sentence_len = char_len(&sentence),
                max_length,
                "Sentence exceeds chunk limit, emitting oversized chunk"
            );
            packer.emit(sentence);
        } else {
            packer.push(&sentence);
        }
    }

    packer.finish()
}

/// 对文本进行分段
///
/// 分段策略：
/// 1. 去除首尾空白，按空行切分为段落
/// 2. 贪心合并段落，合并后长度（含分隔符）不超过 max_length
/// 3. 单个段落超过 max_length 时按句子切分
/// 4. 输出顺序与原文一致
///
/// 空文本或只含空白的文本返回空序列。
pub fn segment_text(text: &str, max_length: usize) -> Result<Vec<String>, SegmentError> {
    if max_length == 0 {
        return Err(SegmentError::InvalidMaxLength);
    }

    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut packer = Packer::new(max_length, PARAGRAPH_SEPARATOR);

    for paragraph in BLANK_LINE_RE.split(text).map(str::trim).filter(|p| !p.is_empty()) {
        if char_len(paragraph) > max_length {
            packer.flush();
            for chunk in segment_sentences(paragraph, max_length) {
                packer.emit(chunk);
            }
        } else {
            packer.push(paragraph);
        }
    }

    Ok(packer.finish())
}
