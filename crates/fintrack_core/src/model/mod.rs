//! Domain model for tracked transactions.
//!
//! # Responsibility
//! - Define the canonical transaction record shared by the manual-entry and
//!   notification-detection paths.
//!
//! # Invariants
//! - Every record is identified by a stable `TransactionId`.
//! - Records are immutable after creation; removal is an explicit delete.

pub mod transaction;
