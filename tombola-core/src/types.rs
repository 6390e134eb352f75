//! Domain types for the tombola registry.
//!
//! Persisted registrants use the camelCase wire layout of the web version's
//! storage; optional per-variant fields are omitted when absent, and a
//! missing `createdAt` rehydrates to "now" on load.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::counter::DEFAULT_SEED;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Unique identifier of a roster entry. Never shown on the ticket and never
/// editable; ticket numbers are the operator-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Accepts both the UUID form this tool writes and the numeric epoch-millis
/// ids found in rosters migrated from the web version. Legacy ids map to a
/// stable UUID so they survive repeated loads unchanged.
impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Compat {
            Uuid(Uuid),
            LegacyMillis(u64),
        }

        Ok(match Compat::deserialize(deserializer)? {
            Compat::Uuid(id) => EntryId(id),
            Compat::LegacyMillis(ms) => EntryId(Uuid::from_u128(ms as u128)),
        })
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A ticket number as printed on the ticket: decimal, zero-padded to a
/// minimum width of 3 (`47` → `"047"`, `1000` → `"1000"`).
///
/// Stored as the formatted string because the operator may overwrite it
/// through a field edit; only [`TicketNumber::from_count`] guarantees the
/// counter-derived form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketNumber(pub String);

impl TicketNumber {
    /// Format a counter value as a ticket number.
    pub fn from_count(count: u64) -> Self {
        Self(format!("{count:03}"))
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TicketNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TicketNumber {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Field keys
// ---------------------------------------------------------------------------

/// The editable fields of a [`Registrant`].
///
/// `id` and `createdAt` deliberately have no key: they are immutable after
/// creation. Edits through a key are applied without re-validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKey {
    Ticket,
    FirstName,
    LastName,
    Address,
    IdentityCode,
    Phone,
}

impl FieldKey {
    /// All field keys in display order.
    pub fn all() -> &'static [FieldKey] {
        &[
            FieldKey::Ticket,
            FieldKey::FirstName,
            FieldKey::LastName,
            FieldKey::Address,
            FieldKey::IdentityCode,
            FieldKey::Phone,
        ]
    }

    /// The CLI-facing spelling of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Ticket => "ticket",
            FieldKey::FirstName => "first-name",
            FieldKey::LastName => "last-name",
            FieldKey::Address => "address",
            FieldKey::IdentityCode => "identity-code",
            FieldKey::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One raffle entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrant {
    #[serde(default)]
    pub id: EntryId,
    pub ticket_number: TicketNumber,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_code: Option<String>,
    pub phone: String,
    /// Stamped once at registration; formatted for display, never recomputed.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Registrant {
    /// `"NOMBRES APELLIDOS"` as printed on tickets and prompts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Candidate field values for a registration, as captured by the form.
/// Only [`crate::registry::TicketRegistry::add`] turns one into a
/// [`Registrant`], after validation and normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRegistrant {
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub identity_code: Option<String>,
    pub phone: String,
}

// ---------------------------------------------------------------------------
// Desk configuration
// ---------------------------------------------------------------------------

/// Which fields the desk collects, the counter seed, and optional default
/// assets for ticket rendering.
///
/// The web version shipped as two near-identical builds — one collecting a
/// street address, one an 8-digit identity code. Here a single configuration
/// selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Counter seed used when no persisted counter value exists.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Collect a free-text street address.
    #[serde(default = "default_true")]
    pub collect_address: bool,
    /// Collect a numeric identity code of exactly this many digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_code_digits: Option<u32>,
    /// Background image for rendered tickets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_template: Option<PathBuf>,
    /// TTF/OTF font for rendered tickets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_font: Option<PathBuf>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            collect_address: true,
            identity_code_digits: None,
            ticket_template: None,
            ticket_font: None,
        }
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_number_zero_pads_to_three() {
        assert_eq!(TicketNumber::from_count(7).0, "007");
        assert_eq!(TicketNumber::from_count(47).0, "047");
        assert_eq!(TicketNumber::from_count(470).0, "470");
    }

    #[test]
    fn ticket_number_widens_past_three_digits() {
        assert_eq!(TicketNumber::from_count(1000).0, "1000");
        assert_eq!(TicketNumber::from_count(12_345).0, "12345");
    }

    #[test]
    fn field_key_display_matches_cli_spelling() {
        assert_eq!(FieldKey::FirstName.to_string(), "first-name");
        assert_eq!(FieldKey::IdentityCode.to_string(), "identity-code");
        assert_eq!(FieldKey::Ticket.to_string(), "ticket");
    }

    #[test]
    fn registrant_serializes_with_camel_case_keys() {
        let r = Registrant {
            id: EntryId::new(),
            ticket_number: TicketNumber::from_count(47),
            first_name: "ANA".to_string(),
            last_name: "LOPEZ".to_string(),
            address: Some("CALLE 1".to_string()),
            identity_code: None,
            phone: "987654321".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&r).expect("serialize");
        assert!(json.contains("\"ticketNumber\":\"047\""));
        assert!(json.contains("\"firstName\":\"ANA\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("identityCode"), "absent fields must be omitted");
    }

    #[test]
    fn legacy_numeric_id_maps_to_a_stable_uuid() {
        let a: EntryId = serde_json::from_str("1712345678901").expect("legacy id");
        let b: EntryId = serde_json::from_str("1712345678901").expect("legacy id");
        assert_eq!(a, b, "the same legacy id must map to the same uuid");

        let uuid = Uuid::new_v4();
        let roundtripped: EntryId =
            serde_json::from_str(&format!("\"{uuid}\"")).expect("uuid id");
        assert_eq!(roundtripped.0, uuid);
    }

    #[test]
    fn registrant_without_id_gets_a_fresh_one() {
        let json = r#"{"ticketNumber":"047","firstName":"ANA","lastName":"LOPEZ","phone":"1"}"#;
        let a: Registrant = serde_json::from_str(json).expect("deserialize");
        let b: Registrant = serde_json::from_str(json).expect("deserialize");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn registrant_missing_created_at_rehydrates_to_now() {
        let json = format!(
            r#"{{"id":"{}","ticketNumber":"047","firstName":"ANA","lastName":"LOPEZ","phone":"987654321"}}"#,
            Uuid::new_v4()
        );
        let before = Utc::now();
        let r: Registrant = serde_json::from_str(&json).expect("deserialize");
        let after = Utc::now();
        assert!(r.created_at >= before && r.created_at <= after);
        assert_eq!(r.address, None);
    }

    #[test]
    fn desk_config_defaults() {
        let cfg = DeskConfig::default();
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert!(cfg.collect_address);
        assert_eq!(cfg.identity_code_digits, None);
    }

    #[test]
    fn desk_config_deserializes_from_empty_object() {
        let cfg: DeskConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(cfg, DeskConfig::default());
    }
}
