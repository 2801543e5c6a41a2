//! Domain model for nightly sleep entries.
//!
//! # Responsibility
//! - Define the canonical `SleepRecord` shape persisted by the store.
//! - Validate raw form input before it can reach persistence.
//!
//! # Invariants
//! - Every record is identified by a stable, store-assigned `RecordId`.
//! - No partially-filled record ever exists: validation runs before SQL.

pub mod sleep_record;

pub use sleep_record::{
    NewSleepRecord, RecordId, SleepRecord, SleepRecordDraft, SleepRecordValidationError,
};
