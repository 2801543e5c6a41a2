//! Route table for the four tracker operations.
//!
//! # Responsibility
//! - Map method + path pairs onto handler operations.
//! - Parse id path segments strictly (positive decimal integers).
//!
//! The transport that produces method/path strings is outside the core;
//! this module is the whole routing contract.

use crate::model::sleep_record::RecordId;

/// One resolvable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /` — render the record list.
    Records,
    /// `POST /add` — add a record from form fields.
    AddRecord,
    /// `GET /delete/{id}` — delete a record permanently.
    DeleteRecord(RecordId),
    /// `GET /toggle/{id}` — flip a record's completed flag.
    ToggleRecord(RecordId),
}

/// Resolves a method/path pair to a route.
///
/// Returns `None` for unknown paths, wrong methods, and malformed ids;
/// the boundary treats that as its generic not-found response.
pub fn resolve_route(method: &str, path: &str) -> Option<Route> {
    match (method, path) {
        ("GET", "/") => Some(Route::Records),
        ("POST", "/add") => Some(Route::AddRecord),
        ("GET", _) => {
            if let Some(raw) = path.strip_prefix("/delete/") {
                return parse_record_id(raw).map(Route::DeleteRecord);
            }
            if let Some(raw) = path.strip_prefix("/toggle/") {
                return parse_record_id(raw).map(Route::ToggleRecord);
            }
            None
        }
        _ => None,
    }
}

/// Parses an id path segment.
///
/// Accepts decimal digits only: no sign, no surrounding whitespace, and
/// the value must be positive. Out-of-range input is rejected rather
/// than wrapped.
fn parse_record_id(raw: &str) -> Option<RecordId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<RecordId>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::{parse_record_id, resolve_route, Route};

    #[test]
    fn resolves_the_four_operations() {
        assert_eq!(resolve_route("GET", "/"), Some(Route::Records));
        assert_eq!(resolve_route("POST", "/add"), Some(Route::AddRecord));
        assert_eq!(
            resolve_route("GET", "/delete/7"),
            Some(Route::DeleteRecord(7))
        );
        assert_eq!(
            resolve_route("GET", "/toggle/12"),
            Some(Route::ToggleRecord(12))
        );
    }

    #[test]
    fn rejects_unknown_paths_and_methods() {
        assert_eq!(resolve_route("GET", "/add"), None);
        assert_eq!(resolve_route("POST", "/"), None);
        assert_eq!(resolve_route("GET", "/delete/"), None);
        assert_eq!(resolve_route("GET", "/export"), None);
        assert_eq!(resolve_route("DELETE", "/delete/3"), None);
    }

    #[test]
    fn id_segments_must_be_positive_decimal_integers() {
        assert_eq!(parse_record_id("42"), Some(42));
        assert_eq!(parse_record_id("0"), None);
        assert_eq!(parse_record_id("-3"), None);
        assert_eq!(parse_record_id("+3"), None);
        assert_eq!(parse_record_id("3.5"), None);
        assert_eq!(parse_record_id(" 3"), None);
        assert_eq!(parse_record_id("abc"), None);
        assert_eq!(parse_record_id("99999999999999999999999"), None);
    }
}
