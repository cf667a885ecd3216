//! 音色目录
//!
//! 每种语言注册的音色类型及其对应的提供方区域选择器。音色差异完全靠
//! 区域（口音）和语速偏置模拟。

use super::value_objects::{Language, SpeedOption, VoiceFilter, VoiceType};

/// 没有注册音色表时使用的区域
pub const DEFAULT_REGION: &str = "com";

/// 音色档案
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceProfile {
    /// 提供方区域选择器（顶级域名）
    pub region: &'static str,
    /// 语速偏置，小于 1.0 时强制慢速以模拟低沉的声音
    pub slow_adjustment: f32,
    pub label: &'static str,
    pub description: &'static str,
}

impl VoiceProfile {
    pub const DEFAULT: VoiceProfile = VoiceProfile {
        region: DEFAULT_REGION,
        slow_adjustment: 1.0,
        label: "Padrão",
        description: "Voz padrão do idioma",
    };

    /// 结合语速选项计算实际的慢速标志
    pub fn effective_slow(&self, speed: SpeedOption) -> bool {
        speed.is_slow() || self.slow_adjustment < 1.0
    }
}

const PT_VOICES: &[(VoiceType, VoiceProfile)] = &[
    (
        VoiceType::Feminina,
        VoiceProfile {
            region: "com.br",
            slow_adjustment: 1.0,
            label: "Feminina",
            description: "Voz feminina com sotaque brasileiro",
        },
    ),
    (
        VoiceType::Masculina,
        VoiceProfile {
            region: "pt",
            slow_adjustment: 0.85,
            label: "Masculina",
            description: "Voz mais grave com sotaque europeu",
        },
    ),
    (
        VoiceType::Infantil,
        VoiceProfile {
            region: "com.br",
            slow_adjustment: 1.15,
            label: "Infantil",
            description: "Voz mais leve e rápida",
        },
    ),
];

const EN_VOICES: &[(VoiceType, VoiceProfile)] = &[
    (
        VoiceType::Feminina,
        VoiceProfile {
            region: "com",
            slow_adjustment: 1.0,
            label: "Feminina",
            description: "American accent",
        },
    ),
    (
        VoiceType::Masculina,
        VoiceProfile {
            region: "co.uk",
            slow_adjustment: 0.9,
            label: "Masculina",
            description: "British accent, slightly deeper",
        },
    ),
];

/// 语言注册的音色表，未注册的语言只有一个隐式默认音色
pub fn voice_profiles(language: Language) -> Option<&'static [(VoiceType, VoiceProfile)]> {
    match language {
        Language::Pt => Some(PT_VOICES),
        Language::En => Some(EN_VOICES),
        _ => None,
    }
}

/// 解析音色档案
///
/// 语言没有音色表，或音色类型不在表中时，回落到 `VoiceProfile::DEFAULT`
pub fn resolve_voice_profile(language: Language, voice_type: VoiceType) -> VoiceProfile {
    voice_profiles(language)
        .and_then(|profiles| {
            profiles
                .iter()
                .find(|(kind, _)| *kind == voice_type)
                .map(|(_, profile)| *profile)
        })
        .unwrap_or(VoiceProfile::DEFAULT)
}

/// 试听用的示例文本
pub fn preview_text(voice_type: VoiceType, voice_filter: VoiceFilter) -> String {
    let intro = match voice_type {
        VoiceType::Feminina => "Olá! Esta é uma demonstração da voz feminina.",
        VoiceType::Masculina => "Olá! Esta é uma demonstração da voz masculina.",
        VoiceType::Infantil => "Oi! Esta é uma demonstração da voz infantil.",
    };

    let effect = match voice_filter {
        VoiceFilter::Normal => "Esta é a voz sem nenhum efeito aplicado.",
        VoiceFilter::Robotico => "Agora eu falo como um robô, palavra por palavra.",
        VoiceFilter::Eco => "Escute o eco repetindo as palavras compridas.",
        VoiceFilter::Sussurro => "Estou falando baixinho, como um segredo.",
        VoiceFilter::Dramatico => "Mas de repente, tudo mudou para sempre.",
        VoiceFilter::Animado => "Isso é incrível, fantástico e maravilhoso.",
    };

    format!("{} {}", intro, effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_profiles() {
        let profile = resolve_voice_profile(Language::Pt, VoiceType::Masculina);
        assert_eq!(profile.region, "pt");
        assert!(profile.slow_adjustment < 1.0);

        let profile = resolve_voice_profile(Language::En, VoiceType::Masculina);
        assert_eq!(profile.region, "co.uk");
    }

    #[test]
    fn test_language_without_table_uses_default_region() {
        let profile = resolve_voice_profile(Language::Ja, VoiceType::Masculina);
        assert_eq!(profile, VoiceProfile::DEFAULT);
        assert_eq!(profile.region, DEFAULT_REGION);
    }

    #[test]
    fn test_absent_voice_type_uses_default_region() {
        let profile = resolve_voice_profile(Language::En, VoiceType::Infantil);
        assert_eq!(profile, VoiceProfile::DEFAULT);
    }

    #[test]
    fn test_effective_slow() {
        let deep = resolve_voice_profile(Language::Pt, VoiceType::Masculina);
        assert!(deep.effective_slow(SpeedOption::Normal));
        assert!(deep.effective_slow(SpeedOption::Rapida));

        let light = resolve_voice_profile(Language::Pt, VoiceType::Infantil);
        assert!(!light.effective_slow(SpeedOption::Normal));
        assert!(light.effective_slow(SpeedOption::Lenta));
    }

    #[test]
    fn test_preview_text_mentions_filter() {
        let text = preview_text(VoiceType::Infantil, VoiceFilter::Dramatico);
        assert!(text.starts_with("Oi!"));
        assert!(text.contains("de repente"));
    }
}
