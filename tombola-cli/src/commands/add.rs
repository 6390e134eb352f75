//! `tombola add` — the registration form's submit.

use anyhow::{Context, Result};
use clap::Args;

use tombola_core::NewRegistrant;

/// Register a person and issue the next ticket.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Given name(s); stored upper-cased.
    #[arg(long)]
    pub first_name: String,

    /// Family name(s); stored upper-cased.
    #[arg(long)]
    pub last_name: String,

    /// Street address (required when the desk collects one).
    #[arg(long)]
    pub address: Option<String>,

    /// Identity code (required when the desk collects one).
    #[arg(long = "identity-code")]
    pub identity_code: Option<String>,

    /// Contact phone, digits only.
    #[arg(long)]
    pub phone: String,
}

impl AddArgs {
    pub fn run(self) -> Result<()> {
        let mut registry = super::open_registry()?;

        let candidate = NewRegistrant {
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            identity_code: self.identity_code,
            phone: self.phone,
        };
        let entry = registry.add(candidate).context("registration rejected")?;

        println!("✓ Ticket {} registered to {}", entry.ticket_number, entry.full_name());
        println!("  Saved to: ~/.tombola/roster.json");
        Ok(())
    }
}
