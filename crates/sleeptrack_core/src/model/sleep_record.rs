//! Sleep record domain model and form-input validation.
//!
//! # Responsibility
//! - Define the persisted `SleepRecord` entity.
//! - Turn raw form text (`SleepRecordDraft`) into a validated payload.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - All four user-supplied fields are non-empty in any persisted record.
//! - `sleep_duration` is finite and strictly positive.
//! - `created_at` is stamped once at insert and never mutated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a persisted sleep record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// One persisted nightly sleep entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    /// Store-assigned monotonic ID.
    pub id: RecordId,
    /// Calendar date of the entry, kept as opaque text.
    ///
    /// Listing sorts this field as a string, so only consistently
    /// zero-padded ISO-style dates order chronologically.
    pub date: String,
    /// Hours slept.
    pub sleep_duration: f64,
    /// Free-text quality label, e.g. "Good" / "Average" / "Poor".
    pub sleep_quality: String,
    /// Wake-up time as `HH:MM` text.
    pub wakeup_time: String,
    /// Completion marker; flipped via toggle only.
    pub completed: bool,
    /// Unix epoch milliseconds, set at insert.
    pub created_at: i64,
}

/// Raw form submission for a new record.
///
/// Fields hold the submitted text verbatim; a missing form field is
/// represented as an empty string and rejected the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SleepRecordDraft {
    pub date: String,
    pub sleep_duration: String,
    pub sleep_quality: String,
    pub wakeup_time: String,
}

/// Validated payload ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSleepRecord {
    pub date: String,
    pub sleep_duration: f64,
    pub sleep_quality: String,
    pub wakeup_time: String,
}

/// Validation failure for a draft record.
#[derive(Debug, Clone, PartialEq)]
pub enum SleepRecordValidationError {
    /// A required field was missing or empty.
    MissingField(&'static str),
    /// The duration text does not parse as a number.
    InvalidDuration(String),
    /// The duration parsed but is not a finite positive value.
    NonPositiveDuration(f64),
}

impl Display for SleepRecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidDuration(raw) => {
                write!(f, "sleep_duration `{raw}` is not a number")
            }
            Self::NonPositiveDuration(value) => {
                write!(f, "sleep_duration {value} must be a positive number of hours")
            }
        }
    }
}

impl Error for SleepRecordValidationError {}

impl SleepRecordDraft {
    /// Creates a draft from the four raw form fields.
    pub fn new(
        date: impl Into<String>,
        sleep_duration: impl Into<String>,
        sleep_quality: impl Into<String>,
        wakeup_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            sleep_duration: sleep_duration.into(),
            sleep_quality: sleep_quality.into(),
            wakeup_time: wakeup_time.into(),
        }
    }

    /// Validates the draft and returns the parsed payload.
    ///
    /// # Contract
    /// - All four fields must be non-empty.
    /// - `sleep_duration` must parse as a finite number > 0.
    /// - Text fields are stored verbatim; no trimming or format checks
    ///   beyond non-emptiness (`wakeup_time` format is intentionally not
    ///   enforced).
    pub fn validate(&self) -> Result<NewSleepRecord, SleepRecordValidationError> {
        if self.date.is_empty() {
            return Err(SleepRecordValidationError::MissingField("date"));
        }
        if self.sleep_duration.is_empty() {
            return Err(SleepRecordValidationError::MissingField("sleep_duration"));
        }
        if self.sleep_quality.is_empty() {
            return Err(SleepRecordValidationError::MissingField("sleep_quality"));
        }
        if self.wakeup_time.is_empty() {
            return Err(SleepRecordValidationError::MissingField("wakeup_time"));
        }

        let duration: f64 = self
            .sleep_duration
            .parse()
            .map_err(|_| SleepRecordValidationError::InvalidDuration(self.sleep_duration.clone()))?;
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SleepRecordValidationError::NonPositiveDuration(duration));
        }

        Ok(NewSleepRecord {
            date: self.date.clone(),
            sleep_duration: duration,
            sleep_quality: self.sleep_quality.clone(),
            wakeup_time: self.wakeup_time.clone(),
        })
    }
}
