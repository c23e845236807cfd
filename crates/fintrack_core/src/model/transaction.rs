//! Transaction domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the transaction store.
//! - Validate amount and timestamp fields before persistence.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another transaction.
//! - `amount` is a signed value: negative for spending, positive for income.
//! - Records are never mutated after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every tracked transaction.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TransactionId = Uuid;

/// Canonical record for one tracked money movement.
///
/// The sign of `amount` carries direction: expenses are stored negative,
/// income positive. There is no separate direction column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable global ID used for listing and deletion.
    pub uuid: TransactionId,
    /// Signed amount in the app currency's major unit.
    pub amount: f64,
    /// Free-text note entered or confirmed by the user.
    pub note: String,
    /// Creation instant in Unix epoch milliseconds.
    pub created_at: i64,
}

/// Validation failure for a transaction record.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    /// Amount is NaN or infinite.
    NonFiniteAmount,
    /// Amount is exactly zero; a zero movement records nothing.
    ZeroAmount,
    /// Creation timestamp predates the Unix epoch.
    NegativeTimestamp(i64),
}

impl Display for TransactionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteAmount => write!(f, "transaction amount must be finite"),
            Self::ZeroAmount => write!(f, "transaction amount must be non-zero"),
            Self::NegativeTimestamp(ts) => {
                write!(f, "transaction timestamp must be non-negative, got {ts}")
            }
        }
    }
}

impl Error for TransactionValidationError {}

impl Transaction {
    /// Creates a new record with a generated stable ID and the current time.
    pub fn new(amount: f64, note: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), amount, note, now_epoch_ms())
    }

    /// Creates a record with caller-provided identity and timestamp.
    ///
    /// Used by import/restore paths where identity already exists externally.
    pub fn with_id(
        uuid: TransactionId,
        amount: f64,
        note: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            uuid,
            amount,
            note: note.into(),
            created_at,
        }
    }

    /// Checks record invariants prior to persistence.
    ///
    /// # Errors
    /// - `NonFiniteAmount` for NaN/infinite amounts.
    /// - `ZeroAmount` for exactly-zero amounts.
    /// - `NegativeTimestamp` when `created_at < 0`.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount);
        }
        if self.amount == 0.0 {
            return Err(TransactionValidationError::ZeroAmount);
        }
        if self.created_at < 0 {
            return Err(TransactionValidationError::NegativeTimestamp(
                self.created_at,
            ));
        }
        Ok(())
    }

    /// Returns whether this record represents money leaving the account.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Falls back to 0 if the system clock reports a pre-epoch time.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
