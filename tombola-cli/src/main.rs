//! Tombola — raffle ticket registration desk CLI.
//!
//! # Usage
//!
//! ```text
//! tombola init [--seed N] [--identity-code DIGITS] [--no-address] [--template PATH] [--font PATH]
//! tombola add --first-name <..> --last-name <..> --phone <..> [--address <..>] [--identity-code <..>]
//! tombola list [--json]
//! tombola show <ticket>
//! tombola edit <ticket> <field> <value>
//! tombola remove <ticket> [--yes]
//! tombola export [--out DIR]
//! tombola render <ticket> [--out DIR] [--font PATH] [--template PATH]
//! tombola render --all [--out DIR]
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, edit::EditArgs, export::ExportArgs, init::InitArgs, list::ListArgs,
    remove::RemoveArgs, render::RenderArgs, show::ShowArgs,
};
use tombola_core::FieldKey;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tombola",
    version,
    about = "Register raffle entries, hand out tickets, export the roster",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set up the desk configuration under ~/.tombola.
    Init(InitArgs),

    /// Register a person and issue the next ticket.
    Add(AddArgs),

    /// List the roster.
    List(ListArgs),

    /// Show one entry in full.
    Show(ShowArgs),

    /// Overwrite one field of an entry (no re-validation).
    Edit(EditArgs),

    /// Remove an entry; its ticket number is not reissued.
    Remove(RemoveArgs),

    /// Write the roster spreadsheet (tickets_generados.xlsx).
    Export(ExportArgs),

    /// Draw printable ticket cards as PNG files.
    Render(RenderArgs),
}

// ---------------------------------------------------------------------------
// Shared FieldKey argument — parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse [`FieldKey`] from CLI args.
#[derive(Debug, Clone)]
pub struct FieldKeyArg(pub FieldKey);

impl FromStr for FieldKeyArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FieldKey::all()
            .iter()
            .find(|key| key.as_str() == s.to_ascii_lowercase())
            .map(|key| Self(*key))
            .ok_or_else(|| {
                let expected: Vec<&str> = FieldKey::all().iter().map(|k| k.as_str()).collect();
                format!("unknown field '{s}'; expected: {}", expected.join(", "))
            })
    }
}

impl fmt::Display for FieldKeyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<FieldKeyArg> for FieldKey {
    fn from(f: FieldKeyArg) -> Self {
        f.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Add(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Show(args) => args.run(),
        Commands::Edit(args) => args.run(),
        Commands::Remove(args) => args.run(),
        Commands::Export(args) => args.run(),
        Commands::Render(args) => args.run(),
    }
}
