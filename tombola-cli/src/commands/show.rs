//! `tombola show <ticket>` — one entry, spelled out.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use tombola_export::rows::format_registered_at;

/// Show one entry in full.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Ticket number as printed (first match wins).
    pub ticket: String,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let registry = super::open_registry()?;
        let index = super::resolve_ticket(&registry, &self.ticket)?;
        let entry = registry
            .get(index)
            .with_context(|| format!("no registrant at position {index}"))?;

        println!("{}", format!("TICKET {}", entry.ticket_number).red().bold());
        println!("  {}", entry.full_name().bold());
        if let Some(address) = &entry.address {
            println!("  {}  {address}", "address".bright_black());
        }
        if let Some(code) = &entry.identity_code {
            println!("  {}  {code}", "id code".bright_black());
        }
        println!("  {}    {}", "phone".bright_black(), entry.phone);
        println!(
            "  {}  {}",
            "issued".bright_black(),
            format_registered_at(&entry.created_at)
        );
        println!(
            "  {} {} of {}",
            "position".bright_black(),
            index + 1,
            registry.len()
        );
        println!("  {}    {}", "entry".bright_black(), entry.id);
        Ok(())
    }
}
