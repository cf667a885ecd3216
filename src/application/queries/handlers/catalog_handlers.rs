//! Catalog Query Handlers

use crate::application::queries::catalog_queries::*;
use crate::domain::voice::{
    voice_profiles, Language, PitchOption, SpeedOption, VoiceConfig, VoiceFilter, VoiceProfile,
    VoiceType,
};

/// GetCatalog Handler - 列出所有可选项
pub struct GetCatalogHandler {
    limits: CatalogLimits,
}

impl GetCatalogHandler {
    pub fn new(chunk_size: usize, max_chars: usize) -> Self {
        Self {
            limits: CatalogLimits {
                chunk_size,
                max_chars,
            },
        }
    }

    pub fn handle(&self, _query: GetCatalogQuery) -> CatalogResponse {
        CatalogResponse {
            languages: Language::ALL
                .iter()
                .map(|l| CatalogEntry {
                    key: l.code(),
                    label: l.label(),
                    description: "",
                })
                .collect(),
            speeds: SpeedOption::ALL
                .iter()
                .map(|s| CatalogEntry {
                    key: s.key(),
                    label: s.label(),
                    description: s.description(),
                })
                .collect(),
            voices: Language::ALL
                .iter()
                .map(|&l| LanguageVoices {
                    language: l.code(),
                    voices: language_voices(l),
                })
                .collect(),
            filters: VoiceFilter::ALL
                .iter()
                .map(|f| CatalogEntry {
                    key: f.key(),
                    label: f.label(),
                    description: f.description(),
                })
                .collect(),
            pitches: PitchOption::ALL
                .iter()
                .map(|p| CatalogEntry {
                    key: p.key(),
                    label: p.label(),
                    description: "",
                })
                .collect(),
            defaults: VoiceConfig::default(),
            limits: self.limits,
        }
    }
}

/// 没有音色表的语言只列出默认音色
fn language_voices(language: Language) -> Vec<CatalogEntry> {
    match voice_profiles(language) {
        Some(profiles) => profiles
            .iter()
            .map(|(voice_type, profile)| CatalogEntry {
                key: voice_type.key(),
                label: profile.label,
                description: profile.description,
            })
            .collect(),
        None => vec![CatalogEntry {
            key: VoiceType::default().key(),
            label: VoiceProfile::DEFAULT.label,
            description: VoiceProfile::DEFAULT.description,
        }],
    }
}
