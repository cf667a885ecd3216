//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::SegmentError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 某个片段合成失败，整个转换中止
    #[error("failed to synthesize part {ordinal}: {message}")]
    SynthesisFailed { ordinal: usize, message: String },

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建片段合成失败错误
    pub fn synthesis_failed(ordinal: usize, message: impl Into<String>) -> Self {
        Self::SynthesisFailed {
            ordinal,
            message: message.into(),
        }
    }
}

impl From<SegmentError> for ApplicationError {
    fn from(err: SegmentError) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::not_found("Conversion", id),
            other => Self::StorageError(other.to_string()),
        }
    }
}
