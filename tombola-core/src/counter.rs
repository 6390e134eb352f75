//! Monotonic ticket counter.
//!
//! The counter value is the number the NEXT ticket will carry. Drawing a
//! ticket formats the current value and then increments, so the sequence for
//! the default seed is `047`, `048`, `049`, ... The value only ever grows;
//! removing a registrant never returns its number to the pool.

use log::warn;

use crate::types::TicketNumber;

/// Seed used when no persisted counter value exists.
pub const DEFAULT_SEED: u64 = 47;

/// The next-ticket counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounter {
    next: u64,
}

impl TicketCounter {
    /// A counter that will hand out `seed` first.
    pub fn seeded(seed: u64) -> Self {
        Self { next: seed }
    }

    /// Rebuild a counter from its persisted decimal form.
    ///
    /// A missing or unparseable value falls back to `seed` with a warning
    /// rather than failing the load; a corrupt counter file must never lock
    /// the desk out of the roster.
    pub fn restore(raw: Option<&str>, seed: u64) -> Self {
        match raw {
            None => Self::seeded(seed),
            Some(text) => match text.trim().parse::<u64>() {
                Ok(value) => Self::seeded(value),
                Err(_) => {
                    warn!("unreadable counter value {text:?}, reseeding at {seed}");
                    Self::seeded(seed)
                }
            },
        }
    }

    /// Draw the next ticket number and advance the counter.
    pub fn next(&mut self) -> TicketNumber {
        let ticket = TicketNumber::from_count(self.next);
        self.next += 1;
        ticket
    }

    /// The value the next call to [`TicketCounter::next`] will format.
    pub fn value(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_counter_hands_out_seed_first() {
        let mut counter = TicketCounter::seeded(DEFAULT_SEED);
        assert_eq!(counter.next().0, "047");
        assert_eq!(counter.next().0, "048");
        assert_eq!(counter.value(), 49);
    }

    #[test]
    fn restore_parses_persisted_value() {
        let counter = TicketCounter::restore(Some("103"), DEFAULT_SEED);
        assert_eq!(counter.value(), 103);
    }

    #[test]
    fn restore_tolerates_surrounding_whitespace() {
        let counter = TicketCounter::restore(Some(" 200\n"), DEFAULT_SEED);
        assert_eq!(counter.value(), 200);
    }

    #[test]
    fn restore_falls_back_on_missing_value() {
        let counter = TicketCounter::restore(None, DEFAULT_SEED);
        assert_eq!(counter.value(), DEFAULT_SEED);
    }

    #[test]
    fn restore_falls_back_on_garbage() {
        let counter = TicketCounter::restore(Some("not-a-number"), 47);
        assert_eq!(counter.value(), 47);
        let counter = TicketCounter::restore(Some("-3"), 47);
        assert_eq!(counter.value(), 47);
    }

    #[test]
    fn counter_crosses_the_padding_boundary() {
        let mut counter = TicketCounter::seeded(999);
        assert_eq!(counter.next().0, "999");
        assert_eq!(counter.next().0, "1000");
    }
}
