//! `tombola render` — printable PNG ticket cards.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tombola_render::TicketArtist;

/// Draw printable ticket cards as PNG files.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Ticket number to render (omit when using `--all`).
    pub ticket: Option<String>,

    /// Render a card for every registrant.
    #[arg(long, conflicts_with = "ticket")]
    pub all: bool,

    /// TTF/OTF font (overrides the configured one).
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Background image (overrides the configured one).
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Directory to write into (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let registry = super::open_registry()?;
        let config = registry.config();

        let font = self
            .font
            .or_else(|| config.ticket_font.clone())
            .context("no ticket font configured — pass --font or set one with `tombola init --font`")?;
        let template = self.template.or_else(|| config.ticket_template.clone());

        let artist = TicketArtist::new(&font, template.as_deref())
            .context("cannot load render assets")?;

        let dir = self.out.unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("cannot create output directory '{}'", dir.display()))?;

        if self.all {
            if registry.is_empty() {
                println!("No registrants yet.");
                return Ok(());
            }
            for entry in registry.roster() {
                let path = artist
                    .render_to_dir(&dir, entry, config)
                    .with_context(|| format!("render failed for ticket {}", entry.ticket_number))?;
                println!("  ✎  {}", path.display());
            }
            println!("✓ Rendered {} tickets", registry.len());
            return Ok(());
        }

        let ticket = self.ticket.context("provide a ticket number or use --all")?;
        let index = super::resolve_ticket(&registry, &ticket)?;
        let entry = registry
            .get(index)
            .with_context(|| format!("no registrant at position {index}"))?;

        let path = artist
            .render_to_dir(&dir, entry, config)
            .with_context(|| format!("render failed for ticket {}", entry.ticket_number))?;
        println!("✓ Rendered ticket {}", entry.ticket_number);
        println!("  ✎  {}", path.display());
        Ok(())
    }
}
