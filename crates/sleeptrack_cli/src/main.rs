//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sleeptrack_core` wiring:
//!   migrations, repository guard, and listing against a fresh store.
//! - Keep output deterministic for quick local sanity checks.

use sleeptrack_core::db::migrations::latest_version;
use sleeptrack_core::db::open_db_in_memory;
use sleeptrack_core::{SleepRecordRepository, SqliteSleepRecordRepository};

fn main() {
    println!("sleeptrack_core version={}", sleeptrack_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("store bootstrap failed: {err}");
            std::process::exit(1);
        }
    };

    let repo = match SqliteSleepRecordRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("repository guard failed: {err}");
            std::process::exit(1);
        }
    };

    match repo.list_all() {
        Ok(records) => {
            println!("schema_version={}", latest_version());
            println!("records={}", records.len());
        }
        Err(err) => {
            eprintln!("listing failed: {err}");
            std::process::exit(1);
        }
    }
}
