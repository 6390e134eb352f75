//! Tombola core library — domain types, the ticket registry, persistence.
//!
//! Public API surface:
//! - [`types`] — newtypes, the roster entry, the desk configuration
//! - [`counter`] — the monotonic ticket counter
//! - [`validate`] — registration checks and input normalization
//! - [`registry`] — the registry state machine
//! - [`store`] — the [`StateStore`] trait plus file and memory backends
//! - [`error`] — [`RegistryError`] and [`ValidationError`]

pub mod counter;
pub mod error;
pub mod registry;
pub mod store;
pub mod types;
pub mod validate;

pub use counter::{TicketCounter, DEFAULT_SEED};
pub use error::{RegistryError, ValidationError};
pub use registry::TicketRegistry;
pub use store::{FileStore, MemoryStore, StateStore};
pub use types::{DeskConfig, EntryId, FieldKey, NewRegistrant, Registrant, TicketNumber};
