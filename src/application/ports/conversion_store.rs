//! Conversion Store Port - 转换结果暂存
//!
//! 转换完成后文件保存在这里，供后续下载

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::AudioFile;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Conversion not found: {0}")]
    NotFound(Uuid),

    #[error("Conversion already exists: {0}")]
    AlreadyExists(Uuid),
}

/// 一次转换的全部输出
#[derive(Debug, Clone)]
pub struct ConversionRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub files: Vec<AudioFile>,
}

impl ConversionRecord {
    pub fn new(files: Vec<AudioFile>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            files,
        }
    }

    pub fn find_file(&self, filename: &str) -> Option<&AudioFile> {
        self.files.iter().find(|f| f.filename == filename)
    }
}

/// Conversion Store Port
pub trait ConversionStorePort: Send + Sync {
    /// 保存转换结果
    fn put(&self, record: ConversionRecord) -> Result<Uuid, StoreError>;

    /// 获取转换结果
    fn get(&self, id: Uuid) -> Result<ConversionRecord, StoreError>;

    /// 获取单个文件
    fn get_file(&self, id: Uuid, filename: &str) -> Result<Option<AudioFile>, StoreError> {
        Ok(self.get(id)?.find_file(filename).cloned())
    }

    /// 删除早于 max_age_secs 的结果，返回删除数量
    fn remove_expired(&self, max_age_secs: u64) -> usize;

    /// 当前保存的转换数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
