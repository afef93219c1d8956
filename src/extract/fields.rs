//! The label table for Form ADT-1
//!
//! Maps the form's printed label strings to output fields. Declaration order
//! is a contract: the associator walks this table top to bottom for every
//! block, so when one block matches several labels, the row declared later
//! wins that position.

use crate::record::FieldKey;

/// How a matched label picks its value among neighboring blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Take the next block, falling back to the previous one. The default.
    NextThenPrevious,
    /// Take the last line of the previous block. ADT-1 prints the CIN value
    /// above its label, sharing a visual block with a discarded caption line;
    /// this policy is specific to that template quirk.
    PreviousLastLine,
}

/// One row of the label table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub label: &'static str,
    pub key: FieldKey,
    pub policy: ValuePolicy,
}

/// The eight labeled sections of Form ADT-1 this tool extracts.
pub const FIELD_RULES: [FieldRule; 8] = [
    FieldRule {
        label: "Name of the company",
        key: FieldKey::CompanyName,
        policy: ValuePolicy::NextThenPrevious,
    },
    FieldRule {
        label: "Corporate identity number (CIN) of company",
        key: FieldKey::Cin,
        policy: ValuePolicy::PreviousLastLine,
    },
    FieldRule {
        label: "Address of the registered office",
        key: FieldKey::RegisteredOffice,
        policy: ValuePolicy::NextThenPrevious,
    },
    FieldRule {
        label: "Date of appointment",
        key: FieldKey::AppointmentDate,
        policy: ValuePolicy::NextThenPrevious,
    },
    FieldRule {
        label: "Name of the auditor or auditor's firm",
        key: FieldKey::AuditorName,
        policy: ValuePolicy::NextThenPrevious,
    },
    FieldRule {
        label: "Address of the Auditor",
        key: FieldKey::AuditorAddress,
        policy: ValuePolicy::NextThenPrevious,
    },
    FieldRule {
        label: "Membership Number of auditor or auditor's firm's registration number",
        key: FieldKey::AuditorFrnOrMembership,
        policy: ValuePolicy::NextThenPrevious,
    },
    FieldRule {
        label: "Nature of appointment",
        key: FieldKey::AppointmentType,
        policy: ValuePolicy::NextThenPrevious,
    },
];

/// True if `text` contains any known label, case-insensitively.
///
/// Blocks that are themselves labels must never be assigned as values.
pub fn contains_label(text: &str) -> bool {
    let lower = text.to_lowercase();
    FIELD_RULES
        .iter()
        .any(|rule| lower.contains(&rule.label.to_lowercase()))
}
