//! `tombola edit <ticket> <field> <value>` — single-field correction.

use anyhow::{Context, Result};
use clap::Args;

use super::super::FieldKeyArg;

/// Overwrite one field of an entry (no re-validation).
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Ticket number as printed (first match wins).
    pub ticket: String,

    /// Field to overwrite: ticket | first-name | last-name | address |
    /// identity-code | phone.
    pub field: FieldKeyArg,

    /// New value; trimmed and upper-cased like form input.
    pub value: String,
}

impl EditArgs {
    pub fn run(self) -> Result<()> {
        let mut registry = super::open_registry()?;
        let index = super::resolve_ticket(&registry, &self.ticket)?;
        let field = self.field.into();

        let updated = registry
            .update(index, field, &self.value)
            .with_context(|| format!("failed to update ticket '{}'", self.ticket))?;

        println!(
            "✎ Ticket {} — {} is now '{}'",
            updated.ticket_number,
            field,
            field_value(&updated, field)
        );
        Ok(())
    }
}

fn field_value(entry: &tombola_core::Registrant, field: tombola_core::FieldKey) -> String {
    use tombola_core::FieldKey;
    match field {
        FieldKey::Ticket => entry.ticket_number.to_string(),
        FieldKey::FirstName => entry.first_name.clone(),
        FieldKey::LastName => entry.last_name.clone(),
        FieldKey::Address => entry.address.clone().unwrap_or_default(),
        FieldKey::IdentityCode => entry.identity_code.clone().unwrap_or_default(),
        FieldKey::Phone => entry.phone.clone(),
    }
}
