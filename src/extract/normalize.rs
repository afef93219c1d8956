//! Record Normalizer: post-extraction value cleanup

use crate::record::ExtractedRecord;
use chrono::NaiveDate;

/// The form prints dates as day/month/year.
const FORM_DATE_FORMAT: &str = "%d/%m/%Y";
/// Output dates are ISO 8601.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reformat the appointment date to ISO 8601 in place.
///
/// Anything that does not parse as `%d/%m/%Y` (empty string, free text, an
/// already-ISO date) passes through unchanged, which also makes this
/// idempotent.
pub fn normalize(record: &mut ExtractedRecord) {
    if let Some(iso) = reformat_date(&record.appointment_date) {
        record.appointment_date = iso;
    }
}

/// `"29/09/2023"` -> `Some("2023-09-29")`; unparseable input -> `None`.
pub fn reformat_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT)
        .ok()
        .map(|date| date.format(ISO_DATE_FORMAT).to_string())
}
