//! # tombola-export
//!
//! Writes the roster as the `tickets_generados.xlsx` spreadsheet the raffle
//! desk hands to the organizers: one `Tickets` sheet, Spanish column headers
//! selected by the desk configuration, one row per registrant.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tombola_export::export_to_dir;
//! use tombola_core::{DeskConfig, Registrant};
//!
//! fn export(roster: &[Registrant]) {
//!     let config = DeskConfig::default();
//!     if let Ok(path) = export_to_dir(Path::new("."), roster, &config) {
//!         println!("wrote {}", path.display());
//!     }
//! }
//! ```

pub mod error;
pub mod rows;
pub mod workbook;

pub use error::ExportError;
pub use rows::{EXPORT_FILE_NAME, SHEET_NAME};
pub use workbook::{export_to_dir, write_workbook};
