//! Field Associator: label/value matching over the reading-order sequence
//!
//! The form prints each value in a block adjacent to its label, so association
//! is neighbor guessing: a block matching a label takes the next block as its
//! value (previous as fallback), except CIN, whose value precedes its label.
//! A neighbor that is itself a label is never taken; two adjacent label rows
//! must not cross-contaminate.

use crate::extract::fields::{contains_label, ValuePolicy, FIELD_RULES};
use crate::record::ExtractedRecord;

/// Run the label table against a reading-order sequence.
///
/// Pure function: no I/O, no global state. Unmatched fields stay empty
/// strings. Label matching is case-insensitive; stored values keep their
/// original casing. A later occurrence of a label overwrites the value an
/// earlier occurrence assigned.
pub fn associate(texts: &[String]) -> ExtractedRecord {
    let mut record = ExtractedRecord::default();

    for (i, text) in texts.iter().enumerate() {
        let lower = text.to_lowercase();

        for rule in &FIELD_RULES {
            if !lower.contains(&rule.label.to_lowercase()) {
                continue;
            }

            match rule.policy {
                ValuePolicy::PreviousLastLine => {
                    let Some(prev) = i.checked_sub(1).map(|p| &texts[p]) else {
                        continue;
                    };
                    if contains_label(prev) {
                        continue;
                    }
                    let last_line = prev.rsplit('\n').next().unwrap_or(prev);
                    record.set(rule.key, last_line.trim().to_string());
                }
                ValuePolicy::NextThenPrevious => {
                    if let Some(next) = texts.get(i + 1) {
                        if !contains_label(next) {
                            record.set(rule.key, next.trim().to_string());
                            continue;
                        }
                    }
                    if let Some(prev) = i.checked_sub(1).map(|p| &texts[p]) {
                        if !contains_label(prev) {
                            record.set(rule.key, prev.trim().to_string());
                        }
                    }
                }
            }
        }
    }

    record
}
