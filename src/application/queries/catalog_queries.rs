//! Catalog Queries - 目录查询

use serde::Serialize;

use crate::domain::voice::VoiceConfig;

/// 获取全部目录
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCatalogQuery;

/// 目录项
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'static str,
}

/// 某种语言可用的音色
#[derive(Debug, Clone, Serialize)]
pub struct LanguageVoices {
    pub language: &'static str,
    pub voices: Vec<CatalogEntry>,
}

/// 分段与提供方字符上限
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogLimits {
    pub chunk_size: usize,
    pub max_chars: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub languages: Vec<CatalogEntry>,
    pub speeds: Vec<CatalogEntry>,
    pub voices: Vec<LanguageVoices>,
    pub filters: Vec<CatalogEntry>,
    pub pitches: Vec<CatalogEntry>,
    pub defaults: VoiceConfig,
    pub limits: CatalogLimits,
}
