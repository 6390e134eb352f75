//! # tombola-render
//!
//! Draws printable ticket cards as PNG files: the registrant's details laid
//! over a background template (or a plain framed card), at twice the 900×300
//! design size for print sharpness.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tombola_render::TicketArtist;
//! use tombola_core::{DeskConfig, Registrant};
//!
//! fn print_card(entry: &Registrant) {
//!     let config = DeskConfig::default();
//!     if let Ok(artist) = TicketArtist::new(Path::new("card.ttf"), None) {
//!         if let Ok(path) = artist.render_to_dir(Path::new("."), entry, &config) {
//!             println!("wrote {}", path.display());
//!         }
//!     }
//! }
//! ```

pub mod artist;
pub mod error;
pub mod layout;

pub use artist::{ticket_file_name, TicketArtist};
pub use error::RenderError;
