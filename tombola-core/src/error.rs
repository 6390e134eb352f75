//! Error types for tombola-core.

use thiserror::Error;

use crate::types::FieldKey;

/// Why a registration candidate was rejected.
///
/// At most one of these is reported per attempt: the checks run in order and
/// the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or whitespace-only.
    #[error("missing required field: {field}")]
    MissingField { field: FieldKey },

    /// The identity code was not exactly the configured number of digits.
    #[error("identity code must be exactly {expected} digits")]
    InvalidIdentityCode { expected: u32 },

    /// The phone contained something other than ASCII digits.
    #[error("phone must contain digits only")]
    InvalidPhone,
}

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A registration candidate failed validation; nothing was persisted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (write/save path — loads degrade instead).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The roster has no entry at the addressed position.
    #[error("no registrant at position {index}")]
    NotFound { index: usize },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.tombola/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
