//! Sheet projection — turns the roster into header and data rows.
//!
//! Column layout follows the desk configuration:
//!
//! | Column       | Present when                  |
//! |--------------|-------------------------------|
//! | Ticket       | always                        |
//! | Nombres      | always                        |
//! | Apellidos    | always                        |
//! | Dirección    | desk collects an address      |
//! | DNI          | desk collects an identity code|
//! | Teléfono     | always                        |
//! | Fecha y Hora | always                        |
//!
//! Timestamps are shown in the desk's local time as `DD/MM/YYYY HH:MM`.

use chrono::{DateTime, Local, Utc};

use tombola_core::{DeskConfig, Registrant};

/// File name the web version downloads as; kept verbatim.
pub const EXPORT_FILE_NAME: &str = "tickets_generados.xlsx";

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Tickets";

/// Header row for this desk configuration.
pub fn headers(config: &DeskConfig) -> Vec<&'static str> {
    let mut headers = vec!["Ticket", "Nombres", "Apellidos"];
    if config.collect_address {
        headers.push("Dirección");
    }
    if config.identity_code_digits.is_some() {
        headers.push("DNI");
    }
    headers.push("Teléfono");
    headers.push("Fecha y Hora");
    headers
}

/// Column widths matching [`headers`], in spreadsheet character units.
pub fn column_widths(config: &DeskConfig) -> Vec<f64> {
    let mut widths = vec![10.0, 22.0, 22.0];
    if config.collect_address {
        widths.push(32.0);
    }
    if config.identity_code_digits.is_some() {
        widths.push(12.0);
    }
    widths.push(14.0);
    widths.push(18.0);
    widths
}

/// One data row for `entry`, cell order matching [`headers`].
///
/// A field the entry does not carry (possible after edits) becomes an empty
/// cell rather than shifting its neighbours.
pub fn row(entry: &Registrant, config: &DeskConfig) -> Vec<String> {
    let mut cells = vec![
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

/// `DD/MM/YYYY HH:MM` in the desk's local timezone.
pub fn format_registered_at(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}
