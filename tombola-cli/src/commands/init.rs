//! `tombola init [--seed N] [--identity-code DIGITS] [--no-address] [--template PATH] [--font PATH]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tombola_core::store::{load_config_at, save_config_at, state_dir, CONFIG_FILE};
use tombola_core::{DeskConfig, DEFAULT_SEED};

/// Set up the desk configuration under ~/.tombola.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Number printed on the first ticket.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Collect an identity code of exactly DIGITS digits.
    #[arg(long = "identity-code", value_name = "DIGITS")]
    pub identity_code: Option<u32>,

    /// Do not collect a street address.
    #[arg(long)]
    pub no_address: bool,

    /// Background image for rendered tickets.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// TTF/OTF font for rendered tickets.
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let dir = state_dir().context("could not determine home directory")?;

        // Idempotent: an already-configured desk is left untouched.
        if dir.join(CONFIG_FILE).exists() {
            let existing = load_config_at(&dir);
            println!("· Desk already configured at ~/.tombola/{CONFIG_FILE}");
            print_summary(&existing);
            return Ok(());
        }

        let template = self
            .template
            .map(|p| {
                p.canonicalize()
                    .with_context(|| format!("cannot resolve template '{}'", p.display()))
            })
            .transpose()?;
        let font = self
            .font
            .map(|p| {
                p.canonicalize()
                    .with_context(|| format!("cannot resolve font '{}'", p.display()))
            })
            .transpose()?;

        let config = DeskConfig {
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            collect_address: !self.no_address,
            identity_code_digits: self.identity_code,
            ticket_template: template,
            ticket_font: font,
        };
        save_config_at(&dir, &config)
            .with_context(|| format!("failed to write {}", dir.join(CONFIG_FILE).display()))?;

        println!("✓ Desk configured");
        println!("  Saved to: ~/.tombola/{CONFIG_FILE}");
        print_summary(&config);
        Ok(())
    }
}

fn print_summary(config: &DeskConfig) {
    let mut fields = vec!["first name", "last name"];
    if config.collect_address {
        fields.push("address");
    }
    if config.identity_code_digits.is_some() {
        fields.push("identity code");
    }
    fields.push("phone");

    println!("  first ticket: {:03}", config.seed);
    println!("  collects: {}", fields.join(", "));
    if let Some(digits) = config.identity_code_digits {
        println!("  identity code length: {digits}");
    }
    if let Some(template) = &config.ticket_template {
        println!("  template: {}", template.display());
    }
    if let Some(font) = &config.ticket_font {
        println!("  font: {}", font.display());
    }
}
