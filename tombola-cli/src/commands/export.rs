//! `tombola export [--out DIR]` — the organizer spreadsheet.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tombola_export::export_to_dir;

/// Write the roster spreadsheet (tickets_generados.xlsx).
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Directory to write into (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(self) -> Result<()> {
        let registry = super::open_registry()?;

        let dir = self.out.unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("cannot create output directory '{}'", dir.display()))?;

        let path = export_to_dir(&dir, registry.roster(), registry.config())
            .context("export failed")?;

        if registry.is_empty() {
            println!("✓ Exported an empty roster (headers only)");
        } else {
            println!("✓ Exported {} registrants", registry.len());
        }
        println!("  ✎  {}", path.display());
        Ok(())
    }
}
