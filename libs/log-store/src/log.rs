use parking_lot::Mutex;
use serde::Deserialize;

use crate::error::LogError;
use crate::record::Record;

// ═══════════════════════════════════════════════════════════════
//  LogConfig
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Upper bound on the number of records. `None` means unbounded.
    #[serde(default)]
    pub max_records: Option<usize>,
}

// ═══════════════════════════════════════════════════════════════
//  Log
// ═══════════════════════════════════════════════════════════════

/// Append-only sequence of records.
///
/// Every operation takes the same exclusive lock, so appends and reads form
/// a single total order: the order in which appends acquire the lock is the
/// order of their offsets, and a read that follows a completed append always
/// sees it. Offsets are dense, starting at 0, and never reused.
#[derive(Debug, Default)]
pub struct Log {
    records: Mutex<Vec<Record>>,
    max_records: Option<usize>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LogConfig) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            max_records: config.max_records,
        }
    }

    /// Append `record` and return the offset it was stored under.
    ///
    /// The incoming `offset` is ignored. Fails only when a `max_records`
    /// limit is configured and already reached; the log is left unchanged.
    pub fn append(&self, mut record: Record) -> Result<u64, LogError> {
        let mut records = self.records.lock();
        if let Some(capacity) = self.max_records {
            if records.len() >= capacity {
                tracing::warn!(capacity, "log full, rejecting append");
                return Err(LogError::CapacityExceeded { capacity });
            }
        }
        record.offset = records.len() as u64;
        let offset = record.offset;
        records.push(record);
        Ok(offset)
    }

    /// Record stored at `offset`, exactly as appended.
    pub fn read(&self, offset: u64) -> Result<Record, LogError> {
        let records = self.records.lock();
        usize::try_from(offset)
            .ok()
            .and_then(|idx| records.get(idx))
            .cloned()
            .ok_or(LogError::OffsetNotFound { offset })
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
