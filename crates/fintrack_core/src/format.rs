//! Locale display formatting for amounts.
//!
//! # Responsibility
//! - Render signed amounts with en-IN digit grouping for UI display.
//!
//! # Invariants
//! - Formatting is pure and never touches parsing logic; the two have
//!   different grouping rules and must stay decoupled.
//! - Output always carries exactly two fraction digits.

/// Formats a signed amount in en-IN style: last three integer digits, then
/// two-digit groups (`-12,34,567.89`).
///
/// Non-finite input renders as `0.00`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }

    let negative = amount < 0.0;
    // Round at two decimals in integer space to dodge float drift.
    let total_paise = (amount.abs() * 100.0).round() as u64;
    let whole = total_paise / 100;
    let paise = total_paise % 100;

    let grouped = group_indian(&whole.to_string());
    if negative {
        format!("-{grouped}.{paise:02}")
    } else {
        format!("{grouped}.{paise:02}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
