//! Core domain logic for the sleep tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::sleep_record::{
    NewSleepRecord, RecordId, SleepRecord, SleepRecordDraft, SleepRecordValidationError,
};
pub use repo::sleep_record_repo::{
    RepoError, RepoResult, SleepRecordRepository, SqliteSleepRecordRepository,
};
pub use service::routes::{resolve_route, Route};
pub use service::tracker_service::{AddOutcome, AddSubmission, PageOutcome, TrackerService};
pub use view::render_records_page;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
