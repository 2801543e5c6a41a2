//! Rendering boundary: record list to HTML page.
//!
//! # Responsibility
//! - Project an ordered record slice into a self-contained HTML page.
//! - Escape all record-sourced text.
//!
//! # Invariants
//! - Records are rendered in the order given; no sorting happens here.
//! - This module performs no I/O and reads nothing but its input.

use crate::model::SleepRecord;
use std::fmt::Write;

/// Renders the record list page.
///
/// The page carries the add form (posting to `/add` with the four form
/// field names the routing contract expects) and one table row per
/// record with its toggle and delete links.
pub fn render_records_page(records: &[SleepRecord]) -> String {
    let mut page = String::with_capacity(1024 + records.len() * 256);

    page.push_str(
        "<!DOCTYPE html>\n\
         <html>\n<head><title>Sleep Tracker</title></head>\n<body>\n\
         <h1>Sleep Tracker</h1>\n\
         <form method=\"post\" action=\"/add\">\n\
         <input type=\"date\" name=\"date\">\n\
         <input type=\"number\" step=\"0.1\" min=\"0\" name=\"sleep_duration\" placeholder=\"Hours slept\">\n\
         <input type=\"text\" name=\"sleep_quality\" placeholder=\"Quality\">\n\
         <input type=\"time\" name=\"wakeup_time\">\n\
         <button type=\"submit\">Add record</button>\n\
         </form>\n",
    );

    if records.is_empty() {
        page.push_str("<p>No sleep records yet.</p>\n");
    } else {
        page.push_str(
            "<table>\n<tr>\
             <th>Date</th><th>Hours</th><th>Quality</th>\
             <th>Woke up</th><th>Completed</th><th></th></tr>\n",
        );
        for record in records {
            render_record_row(&mut page, record);
        }
        page.push_str("</table>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn render_record_row(page: &mut String, record: &SleepRecord) {
    // write! to a String cannot fail.
    let _ = write!(
        page,
        "<tr><td>{date}</td><td>{duration}</td><td>{quality}</td>\
         <td>{wakeup}</td><td>{completed}</td>\
         <td><a href=\"/toggle/{id}\">toggle</a> \
         <a href=\"/delete/{id}\">delete</a></td></tr>\n",
        date = escape_html(&record.date),
        duration = record.sleep_duration,
        quality = escape_html(&record.sleep_quality),
        wakeup = escape_html(&record.wakeup_time),
        completed = if record.completed { "yes" } else { "no" },
        id = record.id,
    );
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
