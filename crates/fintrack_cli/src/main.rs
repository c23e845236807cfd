//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `fintrack_core` linkage.
//! - Run the detector over argv text for quick local sanity checks.

use fintrack_core::{detect, format_inr, Detection};

fn main() {
    println!("fintrack_core ping={}", fintrack_core::ping());
    println!("fintrack_core version={}", fintrack_core::core_version());

    let body = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if body.is_empty() {
        return;
    }

    match detect(&body) {
        Detection::Undetermined => println!("detected=undetermined"),
        detection => {
            let amount = detection.signed_amount().unwrap_or(0.0);
            println!(
                "detected={} amount={} display={}",
                detection.label(),
                amount,
                format_inr(amount)
            );
        }
    }
}
