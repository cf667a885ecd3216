//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ConversionStorePort;
use crate::application::queries::audio_queries::{GetAudioFileQuery, GetAudioFileResponse};
use crate::domain::AUDIO_CONTENT_TYPE;

/// GetAudioFile Handler - 下载转换生成的音频文件
pub struct GetAudioFileHandler {
    store: Arc<dyn ConversionStorePort>,
}

impl GetAudioFileHandler {
    pub fn new(store: Arc<dyn ConversionStorePort>) -> Self {
        Self { store }
    }

    pub fn handle(&self, query: GetAudioFileQuery) -> Result<GetAudioFileResponse, ApplicationError> {
        let file = self
            .store
            .get_file(query.conversion_id, &query.filename)?
            .ok_or_else(|| {
                ApplicationError::not_found(
                    "Audio file",
                    format!("{}/{}", query.conversion_id, query.filename),
                )
            })?;

        Ok(GetAudioFileResponse {
            filename: file.filename,
            audio_data: file.data,
            content_type: AUDIO_CONTENT_TYPE,
        })
    }
}
