//! In-Memory Conversion Stats Implementation

use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::ports::{ConversionStatsPort, StatsSnapshot};

/// 内存会话统计，计数只增不减
#[derive(Debug, Default)]
pub struct InMemoryConversionStats {
    conversions: AtomicU64,
    characters: AtomicU64,
}

impl InMemoryConversionStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversionStatsPort for InMemoryConversionStats {
    fn record(&self, characters: u64) {
        self.conversions.fetch_add(1, Ordering::Relaxed);
        self.characters.fetch_add(characters, Ordering::Relaxed);
    }

    fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            conversions: self.conversions.load(Ordering::Relaxed),
            characters: self.characters.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let stats = InMemoryConversionStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());

        stats.record(120);
        stats.record(30);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.conversions, 2);
        assert_eq!(snapshot.characters, 150);
    }
}
