//! Stats Query Handlers

use std::sync::Arc;

use crate::application::ports::{ConversionStatsPort, ConversionStorePort};
use crate::application::queries::stats_queries::{GetStatsQuery, GetStatsResponse};

/// GetStats Handler - 读取会话统计
pub struct GetStatsHandler {
    stats: Arc<dyn ConversionStatsPort>,
    store: Arc<dyn ConversionStorePort>,
}

impl GetStatsHandler {
    pub fn new(stats: Arc<dyn ConversionStatsPort>, store: Arc<dyn ConversionStorePort>) -> Self {
        Self { stats, store }
    }

    pub fn handle(&self, _query: GetStatsQuery) -> GetStatsResponse {
        let snapshot = self.stats.snapshot();
        GetStatsResponse {
            conversions: snapshot.conversions,
            characters: snapshot.characters,
            stored_conversions: self.store.len(),
        }
    }
}
