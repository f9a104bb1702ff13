use std::collections::VecDeque;
use std::sync::Mutex;

use crate::level::LogLevel;
use crate::record::LogRecord;

/// Bounded FIFO store of captured records.
///
/// One mutex guards the deque: append plus eviction, clear, and snapshot
/// copy each run as a single critical section, so readers never observe a
/// partially-appended or partially-evicted state. Nothing under the lock
/// does I/O or blocks.
#[derive(Debug)]
pub struct CaptureBuffer {
    entries: Mutex<VecDeque<LogRecord>>,
    capacity: usize,
}

impl CaptureBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        CaptureBuffer {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogRecord>> {
        // A poisoned lock only means some test thread panicked mid-append;
        // the deque itself is still a fully-formed value.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a record, evicting the oldest one first if the buffer is full.
    pub fn push(&self, record: LogRecord) {
        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(record);
    }

    /// Copy out matching records in chronological order.
    ///
    /// `category` is an ASCII case-insensitive exact match; `floor` keeps
    /// records at that level or above. Both filters combine with AND.
    pub fn snapshot(&self, category: Option<&str>, floor: Option<LogLevel>) -> Vec<LogRecord> {
        let entries = self.lock();
        entries
            .iter()
            .filter(|record| {
                category.map_or(true, |c| record.category.eq_ignore_ascii_case(c))
                    && floor.map_or(true, |f| record.level >= f)
            })
            .cloned()
            .collect()
    }

    /// Discard all records, keeping capacity and settings intact.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EventId;
    use chrono::Utc;

    fn record(category: &str, level: LogLevel, message: &str) -> LogRecord {
        LogRecord {
            timestamp: Utc::now(),
            level,
            event_id: EventId::default(),
            category: category.to_string(),
            message: message.to_string(),
            error: None,
            state: None,
            scopes: Vec::new(),
        }
    }

    #[test]
    fn evicts_oldest_first_when_full() {
        let buffer = CaptureBuffer::new(3);
        for i in 0..5 {
            buffer.push(record("app", LogLevel::Information, &format!("m{i}")));
        }

        let messages: Vec<String> = buffer
            .snapshot(None, None)
            .into_iter()
            .map(|r| r.message)
            .collect();
        assert_eq!(messages, ["m2", "m3", "m4"]);
    }

    #[test]
    fn snapshot_filters_by_category_case_insensitively() {
        let buffer = CaptureBuffer::new(8);
        buffer.push(record("AppCore", LogLevel::Information, "a"));
        buffer.push(record("Other", LogLevel::Information, "b"));

        let hits = buffer.snapshot(Some("appcore"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].message, "a");
    }

    #[test]
    fn snapshot_filters_by_level_floor() {
        let buffer = CaptureBuffer::new(8);
        buffer.push(record("app", LogLevel::Debug, "low"));
        buffer.push(record("app", LogLevel::Error, "high"));

        let hits = buffer.snapshot(None, Some(LogLevel::Warning));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].message, "high");
    }

    #[test]
    fn clear_is_idempotent() {
        let buffer = CaptureBuffer::new(4);
        buffer.push(record("app", LogLevel::Information, "x"));
        buffer.clear();
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn zero_capacity_still_holds_one_record() {
        let buffer = CaptureBuffer::new(0);
        buffer.push(record("app", LogLevel::Information, "first"));
        buffer.push(record("app", LogLevel::Information, "second"));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.snapshot(None, None)[0].message, "second");
    }
}
