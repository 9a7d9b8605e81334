#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    #[error("offset not found")]
    OffsetNotFound { offset: u64 },

    #[error("log is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },
}

impl LogError {
    /// `true` for reads past the end of the log.
    ///
    /// Callers branch on this to report "no such record" instead of a
    /// generic failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LogError::OffsetNotFound { .. })
    }
}
