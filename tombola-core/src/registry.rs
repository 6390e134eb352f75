//! The ticket registry: counter, roster, and persistence glued together.
//!
//! Admitting a registration runs a fixed pipeline:
//!
//! 1. validate the candidate against the desk configuration
//! 2. normalize every captured value (trim, uppercase)
//! 3. draw the next ticket number and advance the counter
//! 4. stamp id and creation time, append to the roster
//! 5. persist the roster, then the counter
//!
//! Loads never fail: a missing or unreadable roster starts empty with a
//! warning, and the counter reseeds. Saves propagate errors — a desk that
//! cannot write its state must find out immediately, not at the draw.

use log::warn;

use crate::counter::TicketCounter;
use crate::error::RegistryError;
use crate::store::StateStore;
use crate::types::{DeskConfig, EntryId, FieldKey, NewRegistrant, Registrant, TicketNumber};
use crate::validate;

/// The registry state machine.
///
/// Holds the roster in memory and writes through to the [`StateStore`] after
/// every mutation. One registry instance per desk; the CLI builds one per
/// invocation.
pub struct TicketRegistry<S: StateStore> {
    store: S,
    config: DeskConfig,
    counter: TicketCounter,
    roster: Vec<Registrant>,
}

impl<S: StateStore> TicketRegistry<S> {
    // -----------------------------------------------------------------------
    // 1. Open
    // -----------------------------------------------------------------------

    /// Rebuild the registry from the store.
    ///
    /// Degrades instead of failing: an unreadable or malformed roster logs a
    /// warning and starts empty, an unreadable counter reseeds from the
    /// configuration. Registration must stay possible even after state
    /// corruption.
    pub fn open(store: S, config: DeskConfig) -> Self {
        let roster = match store.load_roster() {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Registrant>>(&json) {
                Ok(roster) => roster,
                Err(e) => {
                    warn!("malformed roster ({e}), starting with an empty one");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("cannot read roster ({e}), starting with an empty one");
                Vec::new()
            }
        };

        let raw_counter = match store.load_counter() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("cannot read counter ({e}), reseeding");
                None
            }
        };
        let counter = TicketCounter::restore(raw_counter.as_deref(), config.seed);

        Self { store, config, counter, roster }
    }

    // -----------------------------------------------------------------------
    // 2. Register
    // -----------------------------------------------------------------------

    /// Admit a registration candidate and hand it the next ticket.
    ///
    /// On validation failure nothing changes: no ticket number is consumed
    /// and nothing is written. On success the admitted entry is returned as
    /// persisted.
    pub fn add(&mut self, candidate: NewRegistrant) -> Result<Registrant, RegistryError> {
        validate::check(&candidate, &self.config)?;

        let entry = self.admit(candidate);
        self.roster.push(entry.clone());
        self.persist_roster()?;
        self.persist_counter()?;
        Ok(entry)
    }

    /// Build the persisted form of a validated candidate: normalized values,
    /// fields the desk does not collect dropped, ticket drawn, id and
    /// timestamp stamped.
    fn admit(&mut self, candidate: NewRegistrant) -> Registrant {
        let address = if self.config.collect_address {
            candidate.address.as_deref().map(validate::normalize)
        } else {
            None
        };
        let identity_code = if self.config.identity_code_digits.is_some() {
            candidate.identity_code.as_deref().map(validate::normalize)
        } else {
            None
        };

        Registrant {
            id: EntryId::new(),
            ticket_number: self.counter.next(),
            first_name: validate::normalize(&candidate.first_name),
            last_name: validate::normalize(&candidate.last_name),
            address,
            identity_code,
            phone: validate::normalize(&candidate.phone),
            created_at: chrono::Utc::now(),
        }
    }

    // -----------------------------------------------------------------------
    // 3. Edit
    // -----------------------------------------------------------------------

    /// Overwrite one field of an existing entry.
    ///
    /// Deliberately skips validation so the operator can correct anything,
    /// including the ticket number itself. The value is still normalized.
    /// `id` and `createdAt` are not addressable.
    pub fn update(
        &mut self,
        index: usize,
        field: FieldKey,
        value: &str,
    ) -> Result<Registrant, RegistryError> {
        if index >= self.roster.len() {
            return Err(RegistryError::NotFound { index });
        }

        let value = validate::normalize(value);
        let entry = &mut self.roster[index];
        match field {
            FieldKey::Ticket => entry.ticket_number = TicketNumber::from(value),
            FieldKey::FirstName => entry.first_name = value,
            FieldKey::LastName => entry.last_name = value,
            FieldKey::Address => entry.address = some_unless_empty(value),
            FieldKey::IdentityCode => entry.identity_code = some_unless_empty(value),
            FieldKey::Phone => entry.phone = value,
        }

        let updated = self.roster[index].clone();
        self.persist_roster()?;
        Ok(updated)
    }

    /// Drop an entry from the roster and return it.
    ///
    /// The counter does not move: a removed registrant's number is spent and
    /// never reissued.
    pub fn remove(&mut self, index: usize) -> Result<Registrant, RegistryError> {
        if index >= self.roster.len() {
            return Err(RegistryError::NotFound { index });
        }
        let removed = self.roster.remove(index);
        self.persist_roster()?;
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // 4. Read
    // -----------------------------------------------------------------------

    /// The roster in registration order.
    pub fn roster(&self) -> &[Registrant] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Registrant> {
        self.roster.get(index)
    }

    /// Position of the first entry carrying `ticket`. Ticket numbers are
    /// normally unique but edits can duplicate them; the first match wins.
    pub fn position_of_ticket(&self, ticket: &str) -> Option<usize> {
        self.roster.iter().position(|r| r.ticket_number.0 == ticket)
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// The number the next admitted registrant will receive.
    pub fn next_ticket_value(&self) -> u64 {
        self.counter.value()
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn persist_roster(&mut self) -> Result<(), RegistryError> {
        let json = serde_json::to_string(&self.roster)?;
        self.store.save_roster(&json)
    }

    fn persist_counter(&mut self) -> Result<(), RegistryError> {
        self.store.save_counter(&self.counter.value().to_string())
    }
}

fn some_unless_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
