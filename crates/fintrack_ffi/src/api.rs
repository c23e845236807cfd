//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the mobile UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store path is resolved once per process and then fixed.

use fintrack_core::db::open_db;
use fintrack_core::{
    core_version as core_version_inner, detect, format_inr,
    init_logging as init_logging_inner, now_epoch_ms, ping as ping_inner,
    SqliteTransactionRepository, TransactionId, TransactionService,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const LIST_DEFAULT_LIMIT: u32 = 50;
const LIST_LIMIT_MAX: u32 = 200;
const STORE_DB_FILE_NAME: &str = "fintrack.sqlite3";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Detection result for one notification body.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResponse {
    /// Whether an amount was found at all.
    pub found: bool,
    /// Signed amount (negative for expense), absent when not found.
    pub amount: Option<f64>,
    /// Classification label: `expense|income|undetermined`.
    pub classification: String,
}

/// Transaction list item shaped for direct UI rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionItem {
    /// Stable transaction ID in string form.
    pub transaction_id: String,
    /// Signed amount in major units.
    pub amount: f64,
    /// en-IN grouped display string for the amount.
    pub display_amount: String,
    pub note: String,
    pub created_at_epoch_ms: i64,
}

/// List response envelope for the transactions screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListResponse {
    /// Items sorted newest first (empty on failure).
    pub items: Vec<TransactionItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Effective applied list limit.
    pub applied_limit: u32,
}

/// Generic action response envelope for store mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional created transaction ID.
    pub transaction_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TransactionActionResponse {
    fn success(message: impl Into<String>, transaction_id: Option<String>) -> Self {
        Self {
            ok: true,
            transaction_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            transaction_id: None,
            message: message.into(),
        }
    }
}

/// Daily total envelope for the header figure.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotalResponse {
    /// Signed net total for the local calendar day.
    pub total: f64,
    /// en-IN grouped display string for the total.
    pub display_total: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Runs amount/intent detection over one notification body.
///
/// # FFI contract
/// - Sync call, pure computation, no DB access.
/// - Never panics; `found=false` is a normal outcome, not an error.
#[flutter_rust_bridge::frb(sync)]
pub fn detect_amount(body: String) -> DetectionResponse {
    let detection = detect(&body);
    DetectionResponse {
        found: detection.signed_amount().is_some(),
        amount: detection.signed_amount(),
        classification: detection.label().to_string(),
    }
}

/// Records a manually entered transaction.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns operation result and created transaction ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_transaction(amount: f64, note: String) -> TransactionActionResponse {
    match with_transaction_service(|service| {
        service
            .record_manual(amount, note.trim().to_string())
            .map_err(|err| err.to_string())
    }) {
        Ok(id) => TransactionActionResponse::success("Transaction recorded.", Some(id.to_string())),
        Err(err) => TransactionActionResponse::failure(format!("add_transaction failed: {err}")),
    }
}

/// Confirms a detected notification amount as a stored transaction.
///
/// Re-runs detection on `body` so the confirmed sign always comes from the
/// detector, not from UI state.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Fails (ok=false) when the body has no detectable amount.
#[flutter_rust_bridge::frb(sync)]
pub fn confirm_detected(body: String, note: String) -> TransactionActionResponse {
    let detection = detect(&body);
    match with_transaction_service(|service| {
        service
            .confirm_detection(detection, note.trim().to_string())
            .map_err(|err| err.to_string())
    }) {
        Ok(id) => TransactionActionResponse::success("Transaction recorded.", Some(id.to_string())),
        Err(err) => TransactionActionResponse::failure(format!("confirm_detected failed: {err}")),
    }
}

/// Lists stored transactions, newest first.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns deterministic envelope with applied limit.
#[flutter_rust_bridge::frb(sync)]
pub fn list_transactions(limit: Option<u32>) -> TransactionListResponse {
    let applied_limit = normalize_list_limit(limit);
    match with_transaction_service(|service| {
        service
            .list_recent(Some(applied_limit))
            .map_err(|err| err.to_string())
    }) {
        Ok(transactions) => {
            let items = transactions
                .into_iter()
                .map(|txn| TransactionItem {
                    transaction_id: txn.uuid.to_string(),
                    amount: txn.amount,
                    display_amount: format_inr(txn.amount),
                    note: txn.note,
                    created_at_epoch_ms: txn.created_at,
                })
                .collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No transactions.".to_string()
            } else {
                format!("Listed {} transaction(s).", items.len())
            };
            TransactionListResponse {
                items,
                message,
                applied_limit,
            }
        }
        Err(err) => TransactionListResponse {
            items: Vec::new(),
            message: format!("list_transactions failed: {err}"),
            applied_limit,
        },
    }
}

/// Deletes one transaction by stable ID.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Fails (ok=false) for malformed IDs or missing records.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_transaction(transaction_id: String) -> TransactionActionResponse {
    let id = match transaction_id.trim().parse::<TransactionId>() {
        Ok(id) => id,
        Err(_) => {
            return TransactionActionResponse::failure(format!(
                "delete_transaction failed: invalid transaction id `{transaction_id}`"
            ));
        }
    };
    match with_transaction_service(|service| service.delete(id).map_err(|err| err.to_string())) {
        Ok(()) => TransactionActionResponse::success("Transaction deleted.", Some(id.to_string())),
        Err(err) => TransactionActionResponse::failure(format!("delete_transaction failed: {err}")),
    }
}

/// Returns the running net total for the current local day.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; a failed read reports total 0.00 with an error message.
#[flutter_rust_bridge::frb(sync)]
pub fn today_net_total() -> DailyTotalResponse {
    match with_transaction_service(|service| {
        service
            .daily_net_total(now_epoch_ms())
            .map_err(|err| err.to_string())
    }) {
        Ok(total) => DailyTotalResponse {
            total,
            display_total: format_inr(total),
            message: "ok".to_string(),
        },
        Err(err) => DailyTotalResponse {
            total: 0.0,
            display_total: format_inr(0.0),
            message: format!("today_net_total failed: {err}"),
        },
    }
}

fn normalize_list_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) => LIST_DEFAULT_LIMIT,
        Some(value) if value > LIST_LIMIT_MAX => LIST_LIMIT_MAX,
        Some(value) => value,
        None => LIST_DEFAULT_LIMIT,
    }
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("FINTRACK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn with_transaction_service<T>(
    f: impl FnOnce(&TransactionService<SqliteTransactionRepository<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_store_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        log::warn!("event=store_open module=ffi status=error error={err}");
        format!("store DB open failed: {err}")
    })?;
    let service = TransactionService::new(SqliteTransactionRepository::new(&conn));
    f(&service)
}
