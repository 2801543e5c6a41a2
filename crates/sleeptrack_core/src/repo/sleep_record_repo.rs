//! Sleep record repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the Record Store API: create, list, get, toggle, delete.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `SleepRecordDraft::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `completed` is only ever flipped, never set from caller input.

use crate::db::{migrations, DbError};
use crate::model::sleep_record::{
    RecordId, SleepRecord, SleepRecordDraft, SleepRecordValidationError,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECORD_SELECT_SQL: &str = "SELECT
    id,
    date,
    sleep_duration,
    sleep_quality,
    wakeup_time,
    completed,
    created_at
FROM sleep_records";

const REQUIRED_TABLE: &str = "sleep_records";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "date",
    "sleep_duration",
    "sleep_quality",
    "wakeup_time",
    "completed",
    "created_at",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for sleep record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(SleepRecordValidationError),
    Db(DbError),
    NotFound(RecordId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "sleep record not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted sleep record data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not initialized for schema version {expected_version} (found {actual_version}); open it via db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SleepRecordValidationError> for RepoError {
    fn from(value: SleepRecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the Record Store operations.
pub trait SleepRecordRepository {
    /// Validates and persists a new record; returns the stored row.
    fn create(&self, draft: &SleepRecordDraft) -> RepoResult<SleepRecord>;

    /// Fetches one record by id; `NotFound` when absent.
    fn get(&self, id: RecordId) -> RepoResult<SleepRecord>;

    /// Returns every record ordered by `date` descending.
    fn list_all(&self) -> RepoResult<Vec<SleepRecord>>;

    /// Flips the `completed` flag and returns the updated record.
    fn toggle_completed(&self, id: RecordId) -> RepoResult<SleepRecord>;

    /// Removes a record permanently; no soft delete or recovery.
    fn delete(&self, id: RecordId) -> RepoResult<()>;
}

/// SQLite-backed sleep record repository.
pub struct SqliteSleepRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSleepRecordRepository<'conn> {
    /// Wraps a connection after checking it carries the expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not
    ///   match the latest migration (e.g. a raw connection that skipped
    ///   `db::open_db`).
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   shape does not match this binary.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = migrations::latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [REQUIRED_TABLE],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable(REQUIRED_TABLE));
        }

        let mut stmt = conn.prepare(&format!("PRAGMA table_info({REQUIRED_TABLE});"))?;
        let present: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<_, _>>()?;
        for column in REQUIRED_COLUMNS {
            if !present.iter().any(|name| name == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: REQUIRED_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl SleepRecordRepository for SqliteSleepRecordRepository<'_> {
    fn create(&self, draft: &SleepRecordDraft) -> RepoResult<SleepRecord> {
        let payload = draft.validate()?;

        self.conn.execute(
            "INSERT INTO sleep_records (
                date,
                sleep_duration,
                sleep_quality,
                wakeup_time,
                completed,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, 0, (strftime('%s', 'now') * 1000));",
            params![
                payload.date,
                payload.sleep_duration,
                payload.sleep_quality,
                payload.wakeup_time,
            ],
        )?;

        self.get(self.conn.last_insert_rowid())
    }

    fn get(&self, id: RecordId) -> RepoResult<SleepRecord> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} WHERE id = ?1;"))?;

        let raw = stmt.query_row([id], RawRecordRow::read).optional()?;

        match raw {
            Some(raw) => raw.into_record(),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn list_all(&self) -> RepoResult<Vec<SleepRecord>> {
        // `date` is TEXT, so DESC here is the literal byte-wise string
        // ordering the listing contract specifies. The id tiebreak only
        // stabilizes equal dates.
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} ORDER BY date DESC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(RawRecordRow::read(row)?.into_record()?);
        }

        Ok(records)
    }

    fn toggle_completed(&self, id: RecordId) -> RepoResult<SleepRecord> {
        let changed = self.conn.execute(
            "UPDATE sleep_records
             SET completed = CASE completed WHEN 0 THEN 1 ELSE 0 END
             WHERE id = ?1;",
            [id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get(id)
    }

    fn delete(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM sleep_records WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

/// Column values read verbatim before semantic checks.
struct RawRecordRow {
    id: RecordId,
    date: String,
    sleep_duration: f64,
    sleep_quality: String,
    wakeup_time: String,
    completed: i64,
    created_at: i64,
}

impl RawRecordRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            date: row.get("date")?,
            sleep_duration: row.get("sleep_duration")?,
            sleep_quality: row.get("sleep_quality")?,
            wakeup_time: row.get("wakeup_time")?,
            completed: row.get("completed")?,
            created_at: row.get("created_at")?,
        })
    }

    fn into_record(self) -> RepoResult<SleepRecord> {
        let completed = match self.completed {
            0 => false,
            1 => true,
            other => {
                return Err(RepoError::InvalidData(format!(
                    "invalid completed value `{other}` in sleep_records.completed"
                )));
            }
        };

        Ok(SleepRecord {
            id: self.id,
            date: self.date,
            sleep_duration: self.sleep_duration,
            sleep_quality: self.sleep_quality,
            wakeup_time: self.wakeup_time,
            completed,
            created_at: self.created_at,
        })
    }
}
