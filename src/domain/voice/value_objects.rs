//! Voice Context - Value Objects
//!
//! 所有配置项都是封闭枚举。未知的 key 不报错，而是回落到各自的默认值，
//! 因此反序列化同样不会因为未知取值失败。

use serde::{Deserialize, Serialize};

/// 语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
    Fr,
    It,
    De,
    Ja,
    Ko,
    Zh,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::Pt,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::It,
        Language::De,
        Language::Ja,
        Language::Ko,
        Language::Zh,
    ];

    /// 未知语言代码回落到 `pt`
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "pt" => Self::Pt,
            "en" => Self::En,
            "es" => Self::Es,
            "fr" => Self::Fr,
            "it" => Self::It,
            "de" => Self::De,
            "ja" => Self::Ja,
            "ko" => Self::Ko,
            "zh" => Self::Zh,
            _ => Self::default(),
        }
    }

    /// 提供方使用的语言代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::De => "de",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Zh => "zh",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pt => "Português (Brasil)",
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::It => "Italiano",
            Self::De => "Deutsch",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
            Self::Zh => "中文",
        }
    }
}

impl From<String> for Language {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 语速选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SpeedOption {
    MuitoLenta,
    Lenta,
    #[default]
    Normal,
    Rapida,
}

impl SpeedOption {
    pub const ALL: [SpeedOption; 4] = [
        SpeedOption::MuitoLenta,
        SpeedOption::Lenta,
        SpeedOption::Normal,
        SpeedOption::Rapida,
    ];

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "muito_lenta" => Self::MuitoLenta,
            "lenta" => Self::Lenta,
            "normal" => Self::Normal,
            "rapida" => Self::Rapida,
            _ => Self::default(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::MuitoLenta => "muito_lenta",
            Self::Lenta => "lenta",
            Self::Normal => "normal",
            Self::Rapida => "rapida",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MuitoLenta => "Muito lenta",
            Self::Lenta => "Lenta",
            Self::Normal => "Normal",
            Self::Rapida => "Rápida",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MuitoLenta => "Pausas longas entre as palavras, ideal para estudo",
            Self::Lenta => "Fala pausada e clara",
            Self::Normal => "Velocidade natural de conversa",
            Self::Rapida => "Leitura dinâmica com menos pausas",
        }
    }

    /// 是否请求提供方的慢速模式
    pub fn is_slow(&self) -> bool {
        matches!(self, Self::MuitoLenta | Self::Lenta)
    }

    /// 时长估算使用的每分钟词数
    pub fn words_per_minute(&self) -> u32 {
        match self {
            Self::MuitoLenta => 100,
            Self::Lenta => 130,
            Self::Normal => 160,
            Self::Rapida => 190,
        }
    }
}

impl From<String> for SpeedOption {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// 音色类型（依赖语言，见 `catalog`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum VoiceType {
    #[default]
    Feminina,
    Masculina,
    Infantil,
}

impl VoiceType {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "feminina" => Self::Feminina,
            "masculina" => Self::Masculina,
            "infantil" => Self::Infantil,
            _ => Self::default(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Feminina => "feminina",
            Self::Masculina => "masculina",
            Self::Infantil => "infantil",
        }
    }
}

impl From<String> for VoiceType {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// 音效滤镜
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum VoiceFilter {
    #[default]
    Normal,
    Robotico,
    Eco,
    Sussurro,
    Dramatico,
    Animado,
}

impl VoiceFilter {
    pub const ALL: [VoiceFilter; 6] = [
        VoiceFilter::Normal,
        VoiceFilter::Robotico,
        VoiceFilter::Eco,
        VoiceFilter::Sussurro,
        VoiceFilter::Dramatico,
        VoiceFilter::Animado,
    ];

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "normal" => Self::Normal,
            "robotico" => Self::Robotico,
            "eco" => Self::Eco,
            "sussurro" => Self::Sussurro,
            "dramatico" => Self::Dramatico,
            "animado" => Self::Animado,
            _ => Self::default(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Robotico => "robotico",
            Self::Eco => "eco",
            Self::Sussurro => "sussurro",
            Self::Dramatico => "dramatico",
            Self::Animado => "animado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Robotico => "Robótico",
            Self::Eco => "Eco",
            Self::Sussurro => "Sussurro",
            Self::Dramatico => "Dramático",
            Self::Animado => "Animado",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Sem efeitos adicionais",
            Self::Robotico => "Fala pausada palavra por palavra",
            Self::Eco => "Repete o final de palavras longas",
            Self::Sussurro => "Pausas suaves entre as palavras",
            Self::Dramatico => "Reticências e ênfase em palavras-chave",
            Self::Animado => "Exclamações e entusiasmo",
        }
    }
}

impl From<String> for VoiceFilter {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// 音调选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum PitchOption {
    MuitoGrave,
    Grave,
    #[default]
    Normal,
    Agudo,
    MuitoAgudo,
}

impl PitchOption {
    pub const ALL: [PitchOption; 5] = [
        PitchOption::MuitoGrave,
        PitchOption::Grave,
        PitchOption::Normal,
        PitchOption::Agudo,
        PitchOption::MuitoAgudo,
    ];

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "muito_grave" => Self::MuitoGrave,
            "grave" => Self::Grave,
            "normal" => Self::Normal,
            "agudo" => Self::Agudo,
            "muito_agudo" => Self::MuitoAgudo,
            _ => Self::default(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::MuitoGrave => "muito_grave",
            Self::Grave => "grave",
            Self::Normal => "normal",
            Self::Agudo => "agudo",
            Self::MuitoAgudo => "muito_agudo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MuitoGrave => "Muito grave",
            Self::Grave => "Grave",
            Self::Normal => "Normal",
            Self::Agudo => "Agudo",
            Self::MuitoAgudo => "Muito agudo",
        }
    }

    /// 只用于选择文本变换分支，不参与任何音频处理
    pub fn multiplier(&self) -> f32 {
        match self {
            Self::MuitoGrave => 0.7,
            Self::Grave => 0.85,
            Self::Normal => 1.0,
            Self::Agudo => 1.15,
            Self::MuitoAgudo => 1.3,
        }
    }
}

impl From<String> for PitchOption {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

/// 一次转换使用的音色配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub language: Language,
    pub voice_type: VoiceType,
    pub voice_filter: VoiceFilter,
    pub pitch: PitchOption,
    pub speed: SpeedOption,
}
