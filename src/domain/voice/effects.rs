//! 音效文本变换
//!
//! 通过改写送给提供方的文本来模拟语速、滤镜和音调效果。变换按
//! 语速 → 滤镜 → 音调的固定顺序执行，后面的阶段依赖前面阶段产生的
//! 空白和标点密度。纯函数，相同输入总是得到相同输出。

use once_cell::sync::Lazy;
use regex::Regex;

use super::value_objects::{PitchOption, SpeedOption, VoiceConfig, VoiceFilter};

const LONG_PAUSE: &str = " ... ";
const SHORT_PAUSE: &str = " .. ";
const SOFT_PAUSE: &str = " , ";
const DOT_PAUSE: &str = " . ";

/// 低于该倍率视为低音
const GRAVE_THRESHOLD: f32 = 0.9;
/// 高于该倍率视为高音
const ACUTE_THRESHOLD: f32 = 1.1;

/// 回声阈值：词长超过该值才会产生回声
const ECHO_MIN_WORD_CHARS: usize = 6;
const ECHO_FRAGMENT_CHARS: usize = 3;
const ECHO_EVERY_NTH_WORD: usize = 3;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([,.])").expect("valid regex"));
static SPACE_AFTER_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([,.])\s+").expect("valid regex"));
static REPEATED_PERIODS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.{2,}").expect("valid regex"));
static TERMINAL_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static COMMA_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));
static DRAMATIC_KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(mas|porém|então|finalmente|de repente|nunca|sempre)\b")
        .expect("valid regex")
});
static EXCITED_KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(incrível|fantástico|maravilhoso|ótimo|demais|legal)\b")
        .expect("valid regex")
});

/// 对一个片段应用完整的音效变换
pub fn transform(chunk: &str, config: &VoiceConfig) -> String {
    let text = apply_speed(chunk, config.speed);
    let text = apply_filter(&text, config.voice_filter);
    apply_pitch(&text, config.pitch)
}

/// 语速阶段
pub fn apply_speed(text: &str, speed: SpeedOption) -> String {
    match speed {
        SpeedOption::MuitoLenta => WHITESPACE_RE.replace_all(text.trim(), LONG_PAUSE).into_owned(),
        SpeedOption::Lenta => WHITESPACE_RE.replace_all(text.trim(), SHORT_PAUSE).into_owned(),
        SpeedOption::Rapida => {
            // 只收紧已有的空白，词内的标点（小数、域名）保持不动
            let text = SPACE_BEFORE_PUNCT_RE.replace_all(text, "${1}");
            SPACE_AFTER_PUNCT_RE
                .replace_all(&text, "${1} ")
                .trim_end()
                .to_string()
        }
        SpeedOption::Normal => text.to_string(),
    }
}

/// 滤镜阶段
pub fn apply_filter(text: &str, filter: VoiceFilter) -> String {
    match filter {
        VoiceFilter::Robotico => robotic(text),
        VoiceFilter::Eco => echo(text),
        VoiceFilter::Sussurro => WHITESPACE_RE.replace_all(text.trim(), SOFT_PAUSE).into_owned(),
        VoiceFilter::Dramatico => {
            let text = TERMINAL_PUNCT_RE.replace_all(text, "...");
            DRAMATIC_KEYWORDS_RE
                .replace_all(&text, "... ${1} ...")
                .into_owned()
        }
        VoiceFilter::Animado => {
            let text = text.replace('.', "!");
            EXCITED_KEYWORDS_RE
                .replace_all(&text, "...${1}!")
                .into_owned()
        }
        VoiceFilter::Normal => text.to_string(),
    }
}

/// 音调阶段，倍率只用于选择分支
pub fn apply_pitch(text: &str, pitch: PitchOption) -> String {
    let multiplier = pitch.multiplier();
    if multiplier < GRAVE_THRESHOLD {
        text.split_whitespace().collect::<Vec<_>>().join(DOT_PAUSE)
    } else if multiplier > ACUTE_THRESHOLD {
        let text = COMMA_SPACE_RE.replace_all(text, ",");
        WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
    } else {
        text.to_string()
    }
}

fn robotic(text: &str) -> String {
    let dotted = text
        .split_whitespace()
        .map(|word| format!("{}.", word))
        .collect::<Vec<_>>()
        .join(" ");
    REPEATED_PERIODS_RE.replace_all(&dotted, ".").into_owned()
}

fn echo(text: &str) -> String {
    let mut words: Vec<String> = Vec::new();

    for (i, word) in text.split_whitespace().enumerate() {
        words.push(word.to_string());

        if (i + 1) % ECHO_EVERY_NTH_WORD != 0 {
            continue;
        }
        let core = word.trim_end_matches(|c: char| !c.is_alphanumeric());
        let core_len = core.chars().count();
        if core_len > ECHO_MIN_WORD_CHARS {
            let tail: String = core.chars().skip(core_len - ECHO_FRAGMENT_CHARS).collect();
            words.push(format!("...{}...", tail));
        }
    }

    words.join(" ")
}
