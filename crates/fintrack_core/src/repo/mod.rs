//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the injected transaction-store contract used by services.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Transaction::validate()` before
//!   persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod transaction_repo;
