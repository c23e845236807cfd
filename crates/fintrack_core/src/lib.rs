//! Core domain logic for FinTrack.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod extract;
pub mod format;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;

pub use extract::{detect, Detection};
pub use format::format_inr;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::transaction::{
    now_epoch_ms, Transaction, TransactionId, TransactionValidationError,
};
pub use notify::{NotificationEvent, NotificationFeed, PrefilledEntry};
pub use repo::transaction_repo::{
    RepoError, RepoResult, SqliteTransactionRepository, TransactionListQuery,
    TransactionRepository,
};
pub use service::transaction_service::{TransactionService, TransactionServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
