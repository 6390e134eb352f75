//! `tombola list` — the roster table.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use tombola_core::{DeskConfig, Registrant, TicketNumber};
use tombola_export::rows::format_registered_at;

/// List the roster.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListReportJson<'a> {
    summary: ListSummaryJson,
    registrants: Vec<RegistrantRowJson<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListSummaryJson {
    count: usize,
    next_ticket: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrantRowJson<'a> {
    position: usize,
    #[serde(flatten)]
    entry: &'a Registrant,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = super::open_registry()?;
        let next_ticket = TicketNumber::from_count(registry.next_ticket_value());

        if self.json {
            let payload = ListReportJson {
                summary: ListSummaryJson {
                    count: registry.len(),
                    next_ticket: next_ticket.to_string(),
                },
                registrants: registry
                    .roster()
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| RegistrantRowJson { position: i + 1, entry })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize roster JSON")?
            );
            return Ok(());
        }

        println!(
            "Tombola v{} | {} registrants | next ticket {}",
            env!("CARGO_PKG_VERSION"),
            registry.len(),
            next_ticket,
        );

        if registry.is_empty() {
            println!("No registrants yet.");
            println!("Run: tombola add --first-name <..> --last-name <..> --phone <..>");
            return Ok(());
        }

        print_table(registry.roster(), registry.config());
        Ok(())
    }
}

fn print_table(roster: &[Registrant], config: &DeskConfig) {
    let mut builder = Builder::default();
    builder.push_record(header_cells(config));
    for (i, entry) in roster.iter().enumerate() {
        builder.push_record(row_cells(i + 1, entry, config));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");
}

fn header_cells(config: &DeskConfig) -> Vec<String> {
    let mut cells = vec!["#".to_string(), "ticket".to_string(), "first name".to_string(), "last name".to_string()];
    if config.collect_address {
        cells.push("address".to_string());
    }
    if config.identity_code_digits.is_some() {
        cells.push("identity code".to_string());
    }
    cells.push("phone".to_string());
    cells.push("registered".to_string());
    cells
}

fn row_cells(position: usize, entry: &Registrant, config: &DeskConfig) -> Vec<String> {
    let mut cells = vec![
        position.to_string(),
        entry.ticket_number.to_string(),
        entry.first_name.clone(),
        entry.last_name.clone(),
    ];
    if config.collect_address {
        cells.push(entry.address.clone().unwrap_or_default());
    }
    if config.identity_code_digits.is_some() {
        cells.push(entry.identity_code.clone().unwrap_or_default());
    }
    cells.push(entry.phone.clone());
    cells.push(format_registered_at(&entry.created_at));
    cells
}
