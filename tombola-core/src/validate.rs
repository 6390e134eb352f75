//! Registration validation and input normalization.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//!   1. required-field scan (first name, last name, variant field, phone)
//!   2. identity code shape, when the desk collects one
//!   3. phone shape
//!
//! Only new registrations pass through here. Field edits on existing entries
//! are applied as-is, so an operator can always correct a record the desk
//! captured wrong.

use crate::error::ValidationError;
use crate::types::{DeskConfig, FieldKey, NewRegistrant};

/// Canonical form of an operator-entered value: trimmed and uppercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Validate a registration candidate against the desk configuration.
///
/// Values are trimmed before inspection, so whitespace-only input counts as
/// missing. The candidate itself is not modified; normalization happens when
/// the entry is admitted to the roster.
pub fn check(candidate: &NewRegistrant, config: &DeskConfig) -> Result<(), ValidationError> {
    for field in required_fields(config) {
        if value_of(candidate, field).trim().is_empty() {
            return Err(ValidationError::MissingField { field });
        }
    }

    if let Some(expected) = config.identity_code_digits {
        let code = candidate.identity_code.as_deref().unwrap_or_default().trim();
        if code.len() != expected as usize || !all_digits(code) {
            return Err(ValidationError::InvalidIdentityCode { expected });
        }
    }

    if !all_digits(candidate.phone.trim()) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// The required fields for this desk, in scan order.
fn required_fields(config: &DeskConfig) -> Vec<FieldKey> {
    let mut fields = vec![FieldKey::FirstName, FieldKey::LastName];
    if config.collect_address {
        fields.push(FieldKey::Address);
    }
    if config.identity_code_digits.is_some() {
        fields.push(FieldKey::IdentityCode);
    }
    fields.push(FieldKey::Phone);
    fields
}

fn value_of(candidate: &NewRegistrant, field: FieldKey) -> &str {
    match field {
        FieldKey::FirstName => &candidate.first_name,
        FieldKey::LastName => &candidate.last_name,
        FieldKey::Address => candidate.address.as_deref().unwrap_or_default(),
        FieldKey::IdentityCode => candidate.identity_code.as_deref().unwrap_or_default(),
        FieldKey::Phone => &candidate.phone,
        // The ticket number is counter-assigned and never part of the form.
        FieldKey::Ticket => "",
    }
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
