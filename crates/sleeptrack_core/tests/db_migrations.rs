use rusqlite::Connection;
use sleeptrack_core::db::migrations::latest_version;
use sleeptrack_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "sleep_records");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sleeptrack.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "sleep_records");
}

#[test]
fn records_survive_reopen() {
    use sleeptrack_core::{SleepRecordDraft, SleepRecordRepository, SqliteSleepRecordRepository};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sleeptrack.db");

    let conn = open_db(&path).unwrap();
    let repo = SqliteSleepRecordRepository::try_new(&conn).unwrap();
    let created = repo
        .create(&SleepRecordDraft::new("2024-05-01", "7.5", "Good", "07:00"))
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    let repo = SqliteSleepRecordRepository::try_new(&conn).unwrap();
    let records = repo.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], created);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
