//! Amount and intent detection over raw notification text.
//!
//! # Responsibility
//! - Locate the first currency amount in free-form text.
//! - Classify the movement direction from debit/credit keywords.
//!
//! # Invariants
//! - `detect` is pure, deterministic and total; it never errors or panics.
//! - A numeral without a currency marker is not an amount.
//! - Debit keywords take precedence when both keyword classes match.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Marker spellings all denote the same currency; the numeral allows comma
// grouping and an optional fraction of one or two digits.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:INR|Rs\.?|₹)\s*([\d,]+(?:\.\d{1,2})?)").expect("valid amount regex")
});
static DEBIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:debited|spent|purchase|payment|paid)\b").expect("valid debit regex")
});
static CREDIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:credited|received|refund|deposited)\b").expect("valid credit regex")
});

/// Outcome of running detection over one notification body.
///
/// The amount payload exists exactly when a direction was assigned, so the
/// "amount present iff classified" rule cannot be violated by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detection {
    /// Money left the account; payload is negative.
    Expense(f64),
    /// Money entered the account; payload is positive.
    Income(f64),
    /// No currency amount was found in the text.
    Undetermined,
}

impl Detection {
    /// Returns the signed amount, or `None` for `Undetermined`.
    pub fn signed_amount(&self) -> Option<f64> {
        match self {
            Self::Expense(amount) | Self::Income(amount) => Some(*amount),
            Self::Undetermined => None,
        }
    }

    /// Stable lowercase label for logs and FFI payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense(_) => "expense",
            Self::Income(_) => "income",
            Self::Undetermined => "undetermined",
        }
    }
}

/// Detects a signed amount and direction in raw notification text.
///
/// # Contract
/// - Only the first currency-marked numeral is considered.
/// - Grouping commas are stripped before parsing the magnitude.
/// - A matched numeral that fails to parse counts as no amount.
/// - Direction defaults to expense when no keyword matches; debit keywords
///   win over credit keywords when both are present.
pub fn detect(text: &str) -> Detection {
    let magnitude = AMOUNT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|numeral| numeral.as_str().replace(',', "").parse::<f64>().ok());

    let Some(magnitude) = magnitude else {
        return Detection::Undetermined;
    };
    let magnitude = magnitude.abs();

    if DEBIT_RE.is_match(text) {
        return Detection::Expense(-magnitude);
    }
    if CREDIT_RE.is_match(text) {
        return Detection::Income(magnitude);
    }
    // Unclassified amounts are conservatively treated as spending.
    Detection::Expense(-magnitude)
}
