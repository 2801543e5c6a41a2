use rusqlite::Connection;
use sleeptrack_core::db::open_db_in_memory;
use sleeptrack_core::{
    render_records_page, resolve_route, AddOutcome, AddSubmission, PageOutcome, Route,
    SqliteSleepRecordRepository, TrackerService,
};

fn submission(date: &str, duration: &str, quality: &str, wakeup: &str) -> AddSubmission {
    AddSubmission {
        date: date.to_string(),
        sleep_duration: duration.to_string(),
        sleep_quality: quality.to_string(),
        wakeup_time: wakeup.to_string(),
    }
}

fn service(conn: &Connection) -> TrackerService<SqliteSleepRecordRepository<'_>> {
    TrackerService::new(SqliteSleepRecordRepository::try_new(conn).unwrap())
}

#[test]
fn add_persists_valid_submission() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let outcome = service
        .add_record(&submission("2024-05-01", "7.5", "Good", "07:00"))
        .unwrap();
    let id = match outcome {
        AddOutcome::Created(id) => id,
        AddOutcome::Skipped => panic!("valid submission must not be skipped"),
    };

    let records = service.list_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert!(!records[0].completed);
}

#[test]
fn add_silently_skips_incomplete_submissions() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let incomplete = [
        submission("", "7.5", "Good", "07:00"),
        submission("2024-05-01", "", "Good", "07:00"),
        submission("2024-05-01", "7.5", "", "07:00"),
        submission("2024-05-01", "7.5", "Good", ""),
        submission("2024-05-01", "a lot", "Good", "07:00"),
    ];

    for bad in &incomplete {
        let outcome = service.add_record(bad).unwrap();
        assert_eq!(outcome, AddOutcome::Skipped);
    }

    assert!(service.list_records().unwrap().is_empty());
}

#[test]
fn delete_and_toggle_report_not_found_for_unknown_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(service.delete_record(42).unwrap(), PageOutcome::NotFound);
    assert_eq!(service.toggle_record(42).unwrap(), PageOutcome::NotFound);
}

#[test]
fn add_toggle_delete_end_to_end() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let outcome = service
        .add_record(&submission("2024-05-01", "7.5", "Good", "07:00"))
        .unwrap();
    let id = match outcome {
        AddOutcome::Created(id) => id,
        AddOutcome::Skipped => panic!("valid submission must not be skipped"),
    };

    let records = service.list_records().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.date, "2024-05-01");
    assert_eq!(record.sleep_duration, 7.5);
    assert_eq!(record.sleep_quality, "Good");
    assert_eq!(record.wakeup_time, "07:00");
    assert!(!record.completed);

    assert_eq!(service.toggle_record(id).unwrap(), PageOutcome::SeeRecords);
    assert!(service.list_records().unwrap()[0].completed);

    assert_eq!(service.delete_record(id).unwrap(), PageOutcome::SeeRecords);
    assert!(service.list_records().unwrap().is_empty());
}

#[test]
fn toggle_is_reversible_through_the_handler() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let id = match service
        .add_record(&submission("2024-05-01", "8", "Average", "06:30"))
        .unwrap()
    {
        AddOutcome::Created(id) => id,
        AddOutcome::Skipped => panic!("valid submission must not be skipped"),
    };

    service.toggle_record(id).unwrap();
    service.toggle_record(id).unwrap();
    assert!(!service.list_records().unwrap()[0].completed);
}

#[test]
fn routed_request_drives_the_matching_handler() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let id = match service
        .add_record(&submission("2024-05-01", "7.5", "Good", "07:00"))
        .unwrap()
    {
        AddOutcome::Created(id) => id,
        AddOutcome::Skipped => panic!("valid submission must not be skipped"),
    };

    let outcome = match resolve_route("GET", &format!("/toggle/{id}")).unwrap() {
        Route::ToggleRecord(id) => service.toggle_record(id).unwrap(),
        other => panic!("unexpected route: {other:?}"),
    };
    assert_eq!(outcome, PageOutcome::SeeRecords);

    let outcome = match resolve_route("GET", &format!("/delete/{id}")).unwrap() {
        Route::DeleteRecord(id) => service.delete_record(id).unwrap(),
        other => panic!("unexpected route: {other:?}"),
    };
    assert_eq!(outcome, PageOutcome::SeeRecords);
    assert!(service.list_records().unwrap().is_empty());
}

#[test]
fn listed_records_render_in_store_order() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    for date in ["2024-01-05", "2024-03-01", "2024-02-10"] {
        service
            .add_record(&submission(date, "7.5", "Good", "07:00"))
            .unwrap();
    }

    let records = service.list_records().unwrap();
    let page = render_records_page(&records);

    let march = page.find("2024-03-01").unwrap();
    let february = page.find("2024-02-10").unwrap();
    let january = page.find("2024-01-05").unwrap();
    assert!(march < february && february < january);
}
