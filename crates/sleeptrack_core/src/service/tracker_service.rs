//! Tracker request handlers.
//!
//! # Responsibility
//! - Provide the four operations behind the routing boundary:
//!   list, add, delete, toggle.
//! - Delegate persistence to an injected repository implementation.
//!
//! # Invariants
//! - Handlers never bypass repository validation/persistence contracts.
//! - An invalid add submission performs no write and is recovered
//!   locally; the caller is still directed back to the list view.
//! - A missing id on delete/toggle surfaces as `PageOutcome::NotFound`,
//!   never as a handler error.

use crate::model::sleep_record::{RecordId, SleepRecord, SleepRecordDraft};
use crate::repo::sleep_record_repo::{RepoError, RepoResult, SleepRecordRepository};
use log::{debug, info};

/// Raw add-form submission as received from the routing boundary.
///
/// A field absent from the submission is carried as an empty string;
/// validation treats both the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSubmission {
    pub date: String,
    pub sleep_duration: String,
    pub sleep_quality: String,
    pub wakeup_time: String,
}

/// Result of an add submission. Both variants conclude with the caller
/// being directed back to the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was persisted.
    Created(RecordId),
    /// Validation failed; the write was silently skipped.
    Skipped,
}

/// Boundary outcome for id-addressed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Direct the caller back to the record list.
    SeeRecords,
    /// The addressed record does not exist; surface a not-found page.
    NotFound,
}

/// Handler layer over an injected repository.
///
/// Constructed once at startup and shared for the process lifetime; the
/// repository is passed in rather than reached through a global.
pub struct TrackerService<R: SleepRecordRepository> {
    repo: R,
}

impl<R: SleepRecordRepository> TrackerService<R> {
    /// Creates the handler layer using the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List operation: every record, date-descending, for the view.
    pub fn list_records(&self) -> RepoResult<Vec<SleepRecord>> {
        self.repo.list_all()
    }

    /// Add operation.
    ///
    /// # Contract
    /// - All four fields present and non-empty, duration a positive
    ///   number: the record is persisted with `completed = false`.
    /// - Any validation failure: no write, `AddOutcome::Skipped`.
    /// - Storage failures propagate unchanged.
    pub fn add_record(&self, submission: &AddSubmission) -> RepoResult<AddOutcome> {
        let draft = SleepRecordDraft::new(
            submission.date.clone(),
            submission.sleep_duration.clone(),
            submission.sleep_quality.clone(),
            submission.wakeup_time.clone(),
        );

        match self.repo.create(&draft) {
            Ok(record) => {
                info!(
                    "event=record_add module=service status=ok id={} date={}",
                    record.id, record.date
                );
                Ok(AddOutcome::Created(record.id))
            }
            Err(RepoError::Validation(err)) => {
                // Known usability gap: the submission is dropped without
                // user feedback. Kept until product intent says otherwise.
                debug!("event=record_add module=service status=skipped reason={err}");
                Ok(AddOutcome::Skipped)
            }
            Err(err) => Err(err),
        }
    }

    /// Delete operation: permanent removal by id.
    pub fn delete_record(&self, id: RecordId) -> RepoResult<PageOutcome> {
        match self.repo.delete(id) {
            Ok(()) => {
                info!("event=record_delete module=service status=ok id={id}");
                Ok(PageOutcome::SeeRecords)
            }
            Err(RepoError::NotFound(_)) => Ok(PageOutcome::NotFound),
            Err(err) => Err(err),
        }
    }

    /// Toggle operation: flips `completed` for the addressed record.
    pub fn toggle_record(&self, id: RecordId) -> RepoResult<PageOutcome> {
        match self.repo.toggle_completed(id) {
            Ok(record) => {
                info!(
                    "event=record_toggle module=service status=ok id={id} completed={}",
                    record.completed
                );
                Ok(PageOutcome::SeeRecords)
            }
            Err(RepoError::NotFound(_)) => Ok(PageOutcome::NotFound),
            Err(err) => Err(err),
        }
    }
}
