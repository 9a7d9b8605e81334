//! In-memory append-only log.
//!
//! Records are stored in append order and addressed by a zero-based offset
//! assigned by the [`Log`] at append time. There is no persistence: the log
//! lives exactly as long as its owner.

pub mod error;
pub mod log;
pub mod record;

pub use error::LogError;
pub use log::{Log, LogConfig};
pub use record::Record;
