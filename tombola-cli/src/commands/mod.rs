//! Subcommand implementations.

pub mod add;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod remove;
pub mod render;
pub mod show;

use anyhow::{Context, Result};

use tombola_core::store::load_config_at;
use tombola_core::{FileStore, TicketRegistry};

/// Open the desk registry at `~/.tombola`, configuration included.
pub(crate) fn open_registry() -> Result<TicketRegistry<FileStore>> {
    let store = FileStore::open_default().context("could not determine home directory")?;
    let config = load_config_at(store.dir());
    Ok(TicketRegistry::open(store, config))
}

/// Roster position of the first entry carrying `ticket`.
pub(crate) fn resolve_ticket(
    registry: &TicketRegistry<FileStore>,
    ticket: &str,
) -> Result<usize> {
    registry
        .position_of_ticket(ticket)
        .with_context(|| format!("no registrant with ticket '{ticket}' — see `tombola list`"))
}
