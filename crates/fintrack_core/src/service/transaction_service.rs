//! Transaction use-case service.
//!
//! # Responsibility
//! - Record manual entries and confirmed detections.
//! - Compute the running daily net total shown by the UI.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - The service layer remains storage-agnostic.
//! - The daily total window starts at local midnight of the supplied
//!   instant.

use crate::extract::Detection;
use crate::model::transaction::{Transaction, TransactionId};
use crate::repo::transaction_repo::{
    RepoError, RepoResult, TransactionListQuery, TransactionRepository,
};
use chrono::{LocalResult, TimeZone};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for transaction use-cases.
#[derive(Debug)]
pub enum TransactionServiceError {
    /// Amount input is not a usable non-zero finite number.
    InvalidAmount(f64),
    /// Confirmation was requested for a detection that found nothing.
    NothingDetected,
    /// Target transaction does not exist.
    TransactionNotFound(TransactionId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TransactionServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(amount) => write!(f, "invalid transaction amount: {amount}"),
            Self::NothingDetected => write!(f, "detection found no amount to confirm"),
            Self::TransactionNotFound(id) => write!(f, "transaction not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TransactionServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TransactionServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TransactionNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service facade over repository implementations.
pub struct TransactionService<R: TransactionRepository> {
    repo: R,
}

impl<R: TransactionRepository> TransactionService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records a manually entered transaction.
    ///
    /// The amount is taken as-is: the user controls the sign for manual
    /// entries. Non-finite or zero amounts are rejected before the repo is
    /// touched.
    pub fn record_manual(
        &self,
        amount: f64,
        note: impl Into<String>,
    ) -> Result<TransactionId, TransactionServiceError> {
        if !amount.is_finite() || amount == 0.0 {
            return Err(TransactionServiceError::InvalidAmount(amount));
        }
        let txn = Transaction::new(amount, note);
        Ok(self.repo.append_transaction(&txn)?)
    }

    /// Records a user-confirmed detection from a notification body.
    ///
    /// The sign comes from the detection (expense negative, income
    /// positive); `Undetermined` detections carry nothing to confirm and are
    /// rejected.
    pub fn confirm_detection(
        &self,
        detection: Detection,
        note: impl Into<String>,
    ) -> Result<TransactionId, TransactionServiceError> {
        let amount = detection
            .signed_amount()
            .ok_or(TransactionServiceError::NothingDetected)?;
        self.record_manual(amount, note)
    }

    /// Gets one transaction by stable ID.
    pub fn get(&self, id: TransactionId) -> RepoResult<Option<Transaction>> {
        self.repo.get_transaction(id)
    }

    /// Lists recent transactions, newest first.
    pub fn list_recent(&self, limit: Option<u32>) -> RepoResult<Vec<Transaction>> {
        self.repo.list_transactions(&TransactionListQuery {
            limit,
            ..TransactionListQuery::default()
        })
    }

    /// Deletes a transaction by stable ID.
    pub fn delete(&self, id: TransactionId) -> Result<(), TransactionServiceError> {
        Ok(self.repo.delete_transaction(id)?)
    }

    /// Sums signed amounts of records created at or after `since_epoch_ms`.
    pub fn net_total_since(&self, since_epoch_ms: i64) -> RepoResult<f64> {
        let transactions = self.repo.list_transactions(&TransactionListQuery {
            since_epoch_ms: Some(since_epoch_ms),
            ..TransactionListQuery::default()
        })?;
        Ok(transactions.iter().map(|txn| txn.amount).sum())
    }

    /// Running net total for the local calendar day containing
    /// `now_epoch_ms`.
    pub fn daily_net_total(&self, now_epoch_ms: i64) -> RepoResult<f64> {
        self.net_total_since(local_day_start_ms(now_epoch_ms))
    }
}

/// Epoch-ms instant of local midnight for the day containing
/// `now_epoch_ms`.
///
/// Falls back to the input instant when the local timezone cannot represent
/// the conversion (never later than the input).
pub fn local_day_start_ms(now_epoch_ms: i64) -> i64 {
    let now = match chrono::Local.timestamp_millis_opt(now_epoch_ms) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => return now_epoch_ms,
    };
    let midnight = match now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_local_timezone(chrono::Local))
    {
        Some(LocalResult::Single(dt)) => dt,
        Some(LocalResult::Ambiguous(dt, _)) => dt,
        _ => return now_epoch_ms,
    };
    midnight.timestamp_millis()
}
