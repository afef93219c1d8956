//! The extracted output record

use crate::error::Result;
use serde::Serialize;

/// Output field identifiers, one per entry in the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    CompanyName,
    Cin,
    RegisteredOffice,
    AppointmentDate,
    AuditorName,
    AuditorAddress,
    AuditorFrnOrMembership,
    AppointmentType,
}

/// Structured data extracted from one ADT-1 filing.
///
/// All eight keys are always serialized, in declaration order; fields with no
/// association stay empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    pub company_name: String,
    pub cin: String,
    pub registered_office: String,
    pub appointment_date: String,
    pub auditor_name: String,
    pub auditor_address: String,
    pub auditor_frn_or_membership: String,
    pub appointment_type: String,
}

impl ExtractedRecord {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::CompanyName => &self.company_name,
            FieldKey::Cin => &self.cin,
            FieldKey::RegisteredOffice => &self.registered_office,
            FieldKey::AppointmentDate => &self.appointment_date,
            FieldKey::AuditorName => &self.auditor_name,
            FieldKey::AuditorAddress => &self.auditor_address,
            FieldKey::AuditorFrnOrMembership => &self.auditor_frn_or_membership,
            FieldKey::AppointmentType => &self.appointment_type,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        match key {
            FieldKey::CompanyName => self.company_name = value,
            FieldKey::Cin => self.cin = value,
            FieldKey::RegisteredOffice => self.registered_office = value,
            FieldKey::AppointmentDate => self.appointment_date = value,
            FieldKey::AuditorName => self.auditor_name = value,
            FieldKey::AuditorAddress => self.auditor_address = value,
            FieldKey::AuditorFrnOrMembership => self.auditor_frn_or_membership = value,
            FieldKey::AppointmentType => self.appointment_type = value,
        }
    }

    /// Serialize with 2-space indentation, all keys present.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
