//! In-Memory Conversion Store Implementation

use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::application::ports::{ConversionRecord, ConversionStorePort, StoreError};

/// 内存转换结果存储
///
/// 超过 `max_conversions` 时淘汰最早的结果
pub struct InMemoryConversionStore {
    conversions: DashMap<Uuid, ConversionRecord>,
    max_conversions: usize,
    /// 串行化 put，淘汰和插入之间不能插进别的写入
    put_lock: Mutex<()>,
}

impl InMemoryConversionStore {
    pub fn new(max_conversions: usize) -> Self {
        Self {
            conversions: DashMap::new(),
            max_conversions,
            put_lock: Mutex::new(()),
        }
    }

    /// 淘汰最早的结果直到容量低于上限
    fn evict_oldest(&self) {
        while self.max_conversions > 0 && self.conversions.len() >= self.max_conversions {
            let oldest = self
                .conversions
                .iter()
                .min_by_key(|entry| entry.created_at)
                .map(|entry| *entry.key());

            match oldest {
                Some(id) => {
                    self.conversions.remove(&id);
                    tracing::debug!(conversion_id = %id, "Evicted oldest conversion");
                }
                None => break,
            }
        }
    }
}

impl Default for InMemoryConversionStore {
    fn default() -> Self {
        Self::new(100)
    }
}

impl ConversionStorePort for InMemoryConversionStore {
    fn put(&self, record: ConversionRecord) -> Result<Uuid, StoreError> {
        let id = record.id;
        let _guard = self.put_lock.lock().unwrap_or_else(|e| e.into_inner());

        if self.conversions.contains_key(&id) {
            return Err(StoreError::AlreadyExists(id));
        }
        // evict_oldest 会遍历所有分片，必须在持有 entry 之前完成
        self.evict_oldest();
        match self.conversions.entry(id) {
            Entry::Occupied(_) => return Err(StoreError::AlreadyExists(id)),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
        tracing::debug!(conversion_id = %id, "Conversion stored");
        Ok(id)
    }

    fn get(&self, id: Uuid) -> Result<ConversionRecord, StoreError> {
        self.conversions
            .get(&id)
            .map(|r| r.clone())
            .ok_or(StoreError::NotFound(id))
    }

    fn remove_expired(&self, max_age_secs: u64) -> usize {
        // 超出 chrono 可表示范围的时长意味着没有任何结果会过期
        let Ok(max_age) = chrono::Duration::from_std(Duration::from_secs(max_age_secs)) else {
            return 0;
        };
        let now = Utc::now();

        let before = self.conversions.len();
        self.conversions
            .retain(|_, record| now - record.created_at <= max_age);
        let removed = before.saturating_sub(self.conversions.len());

        if removed > 0 {
            tracing::info!(removed, "Expired conversions removed");
        }
        removed
    }

    fn len(&self) -> usize {
        self.conversions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AudioFile;

    fn record(name: &str) -> ConversionRecord {
        ConversionRecord::new(vec![AudioFile {
            filename: name.to_string(),
            data: name.as_bytes().to_vec(),
        }])
    }

    #[test]
    fn test_put_and_get_file() {
        let store = InMemoryConversionStore::new(10);
        let id = store.put(record("audio_part_01.mp3")).unwrap();

        let file = store.get_file(id, "audio_part_01.mp3").unwrap().unwrap();
        assert_eq!(file.data, b"audio_part_01.mp3");
        assert!(store.get_file(id, "missing.mp3").unwrap().is_none());
    }

    #[test]
    fn test_unknown_conversion() {
        let store = InMemoryConversionStore::new(10);
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let store = InMemoryConversionStore::new(10);
        let rec = record("a.mp3");
        store.put(rec.clone()).unwrap();
        assert!(matches!(store.put(rec), Err(StoreError::AlreadyExists(_))));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let store = InMemoryConversionStore::new(2);
        let mut first = record("1.mp3");
        first.created_at = Utc::now() - chrono::Duration::seconds(60);
        let first_id = store.put(first).unwrap();
        let second_id = store.put(record("2.mp3")).unwrap();
        let third_id = store.put(record("3.mp3")).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.get(first_id).is_err());
        assert!(store.get(second_id).is_ok());
        assert!(store.get(third_id).is_ok());
    }

    #[test]
    fn test_remove_expired() {
        let store = InMemoryConversionStore::new(10);
        let mut old = record("old.mp3");
        old.created_at = Utc::now() - chrono::Duration::seconds(7200);
        store.put(old).unwrap();
        store.put(record("new.mp3")).unwrap();

        assert_eq!(store.remove_expired(3600), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_huge_max_age_keeps_everything() {
        let store = InMemoryConversionStore::new(10);
        let mut old = record("old.mp3");
        old.created_at = Utc::now() - chrono::Duration::days(3650);
        store.put(old).unwrap();
        store.put(record("new.mp3")).unwrap();

        assert_eq!(store.remove_expired(u64::MAX), 0);
        assert_eq!(store.remove_expired(i64::MAX as u64), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_concurrent_puts_respect_capacity() {
        let store = InMemoryConversionStore::new(5);

        std::thread::scope(|scope| {
            for t in 0..8 {
                let store = &store;
                scope.spawn(move || {
                    for i in 0..50 {
                        store.put(record(&format!("{t}_{i}.mp3"))).unwrap();
                        assert!(store.len() <= 5);
                    }
                });
            }
        });

        assert_eq!(store.len(), 5);
    }
}
