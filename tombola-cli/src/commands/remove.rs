//! `tombola remove <ticket> [--yes]` — drop an entry, keep its number spent.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

/// Remove an entry; its ticket number is not reissued.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Ticket number as printed (first match wins).
    pub ticket: String,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

impl RemoveArgs {
    pub fn run(self) -> Result<()> {
        let mut registry = super::open_registry()?;
        let index = super::resolve_ticket(&registry, &self.ticket)?;
        let holder = registry
            .get(index)
            .with_context(|| format!("no registrant at position {index}"))?
            .full_name();

        if !self.yes && !confirm(&self.ticket, &holder)? {
            println!("· Nothing removed.");
            return Ok(());
        }

        let removed = registry
            .remove(index)
            .with_context(|| format!("failed to remove ticket '{}'", self.ticket))?;
        println!("✓ Removed ticket {} ({})", removed.ticket_number, removed.full_name());
        Ok(())
    }
}

fn confirm(ticket: &str, holder: &str) -> Result<bool> {
    print!("Remove ticket {ticket} ({holder})? [y/N] ");
    io::stdout().flush().context("cannot flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("cannot read confirmation")?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
