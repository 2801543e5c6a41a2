//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for sleep records.
//! - Isolate SQLite query details from handler orchestration.
//!
//! # Invariants
//! - Repository writes run `SleepRecordDraft::validate()` before SQL.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   DB transport errors.

pub mod sleep_record_repo;
