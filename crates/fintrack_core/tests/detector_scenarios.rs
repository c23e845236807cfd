//! End-to-end detector scenarios over realistic notification bodies.

use fintrack_core::{detect, Detection};

#[test]
fn bank_debit_alert_with_grouped_amount() {
    assert_eq!(
        detect("INR 1,234.50 debited from your account"),
        Detection::Expense(-1234.50)
    );
}

#[test]
fn wallet_credit_with_abbreviated_marker() {
    assert_eq!(
        detect("Rs. 500 credited to your wallet"),
        Detection::Income(500.0)
    );
}

#[test]
fn refund_with_currency_glyph() {
    assert_eq!(detect("₹2000 received as refund"), Detection::Income(2000.0));
}

#[test]
fn spend_alert_with_single_fraction_digit() {
    assert_eq!(
        detect("You spent INR 99.9 at a store"),
        Detection::Expense(-99.9)
    );
}

#[test]
fn otp_message_has_no_amount() {
    assert_eq!(detect("Your OTP is 4532"), Detection::Undetermined);
}

#[test]
fn debit_takes_precedence_when_both_keywords_present() {
    assert_eq!(
        detect("INR 100 debited and INR 50 credited"),
        Detection::Expense(-100.0)
    );
}

#[test]
fn texts_without_marker_are_always_undetermined() {
    for body in [
        "",
        "reminder: pay rent tomorrow",
        "your balance is 1234.56",
        "lottery! you won 1,00,000",
    ] {
        assert_eq!(detect(body), Detection::Undetermined, "body: {body:?}");
    }
}

#[test]
fn debit_keyword_anywhere_forces_expense() {
    for body in [
        "payment of INR 89 completed",
        "purchase alert: Rs 1,500 at MegaMart",
        "you paid ₹45.00 for the ride",
        "INR 12,000 spent this month",
    ] {
        let detection = detect(body);
        assert!(
            matches!(detection, Detection::Expense(amount) if amount < 0.0),
            "body: {body:?}, got {detection:?}"
        );
    }
}

#[test]
fn credit_keyword_without_debit_yields_income() {
    for body in [
        "salary of INR 85,000.00 credited",
        "cashback Rs 30 received",
        "₹1,000 deposited to your account",
    ] {
        let detection = detect(body);
        assert!(
            matches!(detection, Detection::Income(amount) if amount > 0.0),
            "body: {body:?}, got {detection:?}"
        );
    }
}

#[test]
fn unkeyworded_amounts_default_to_expense() {
    assert_eq!(
        detect("INR 250 towards monthly plan"),
        Detection::Expense(-250.0)
    );
}

#[test]
fn repeat_calls_are_identical() {
    let body = "Rs. 1,23,456.78 debited for rent";
    assert_eq!(detect(body), detect(body));
}
