//! 文本统计
//!
//! 字符数、词数与朗读时长估算。时长只用于展示，实际时长由提供方决定。

use super::voice::SpeedOption;

/// 字符数（按 Unicode 标量计数）
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// 词数（按空白切分）
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 估算朗读时长（秒）
pub fn estimate_duration_secs(text: &str, speed: SpeedOption) -> u64 {
    let minutes = word_count(text) as f64 / f64::from(speed.words_per_minute());
    (minutes * 60.0) as u64
}

/// 格式化时长：不足一分钟为 `{s}s`，否则 `{m}m {s}s`
pub fn format_duration(total_secs: u64) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// 估算并格式化朗读时长
pub fn estimate_duration(text: &str, speed: SpeedOption) -> String {
    format_duration(estimate_duration_secs(text, speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_320_words_at_normal_speed() {
        let text = "palavra ".repeat(320);
        assert_eq!(word_count(&text), 320);
        assert_eq!(estimate_duration(&text, SpeedOption::Normal), "2m 0s");
    }

    #[test]
    fn test_under_a_minute() {
        let text = "palavra ".repeat(80);
        assert_eq!(estimate_duration(&text, SpeedOption::Normal), "30s");
    }

    #[test]
    fn test_slower_speed_takes_longer() {
        let text = "palavra ".repeat(100);
        assert_eq!(estimate_duration(&text, SpeedOption::MuitoLenta), "1m 0s");
        assert!(
            estimate_duration_secs(&text, SpeedOption::Lenta)
                > estimate_duration_secs(&text, SpeedOption::Rapida)
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(estimate_duration("", SpeedOption::Normal), "0s");
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn test_char_count_is_unicode_aware() {
        assert_eq!(char_count("ação"), 4);
    }
}
