//! Notification intake boundary.
//!
//! # Responsibility
//! - Receive raw notification bodies from the host-OS listener glue.
//! - Run detection and surface prefilled entries for user confirmation.
//!
//! # Invariants
//! - Events are consumed one at a time, in arrival order.
//! - Bodies with no detectable amount are dropped, never surfaced.
//! - The feed owns no store access; confirmation goes through the service.

use crate::extract::{detect, Detection};
use log::debug;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

/// Raw payload delivered by the host notification listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub body: String,
}

/// Detection outcome surfaced to the UI for confirmation or editing.
///
/// Only produced for non-`Undetermined` detections, so `detection` always
/// carries an amount.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefilledEntry {
    pub detection: Detection,
    /// Original body, kept so the UI can prefill the note field.
    pub body: String,
}

impl PrefilledEntry {
    /// Signed amount carried by the detection.
    pub fn amount(&self) -> f64 {
        // Feed construction guarantees a determined detection.
        self.detection.signed_amount().unwrap_or(0.0)
    }
}

/// Consuming side of the notification channel.
///
/// Decoupled from UI render timing: the listener glue pushes events whenever
/// the OS surfaces them, and the UI drains prefills whenever convenient.
pub struct NotificationFeed {
    rx: Receiver<NotificationEvent>,
}

impl NotificationFeed {
    /// Creates a connected sender/feed pair.
    pub fn channel() -> (Sender<NotificationEvent>, NotificationFeed) {
        let (tx, rx) = channel();
        (tx, NotificationFeed { rx })
    }

    /// Wraps an externally created receiver.
    pub fn from_receiver(rx: Receiver<NotificationEvent>) -> Self {
        Self { rx }
    }

    /// Returns the next prefilled entry without blocking.
    ///
    /// Skips over queued events whose body contains no detectable amount;
    /// returns `None` once the queue is empty or the sender disconnected.
    pub fn try_next_prefill(&self) -> Option<PrefilledEntry> {
        loop {
            let event = match self.rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            };

            match detect(&event.body) {
                Detection::Undetermined => {
                    debug!("event=notification_skipped module=notify status=ok reason=no_amount");
                }
                detection => {
                    debug!(
                        "event=notification_detected module=notify status=ok classification={}",
                        detection.label()
                    );
                    return Some(PrefilledEntry {
                        detection,
                        body: event.body,
                    });
                }
            }
        }
    }

    /// Drains all queued events into prefilled entries, arrival order kept.
    pub fn drain_prefills(&self) -> Vec<PrefilledEntry> {
        let mut prefills = Vec::new();
        while let Some(prefill) = self.try_next_prefill() {
            prefills.push(prefill);
        }
        prefills
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationEvent, NotificationFeed};
    use crate::extract::Detection;

    fn event(body: &str) -> NotificationEvent {
        NotificationEvent {
            body: body.to_string(),
        }
    }

    #[test]
    fn empty_feed_yields_nothing() {
        let (_tx, feed) = NotificationFeed::channel();
        assert!(feed.try_next_prefill().is_none());
    }

    #[test]
    fn undetermined_bodies_are_skipped() {
        let (tx, feed) = NotificationFeed::channel();
        tx.send(event("Your OTP is 4532")).unwrap();
        tx.send(event("INR 500 debited")).unwrap();

        let prefill = feed.try_next_prefill().unwrap();
        assert_eq!(prefill.detection, Detection::Expense(-500.0));
        assert_eq!(prefill.amount(), -500.0);
        assert!(feed.try_next_prefill().is_none());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let (tx, feed) = NotificationFeed::channel();
        tx.send(event("Rs. 100 paid at store")).unwrap();
        tx.send(event("promo: huge savings today")).unwrap();
        tx.send(event("₹250 credited to your wallet")).unwrap();

        let prefills = feed.drain_prefills();
        assert_eq!(prefills.len(), 2);
        assert_eq!(prefills[0].detection, Detection::Expense(-100.0));
        assert_eq!(prefills[1].detection, Detection::Income(250.0));
    }

    #[test]
    fn disconnected_sender_ends_feed() {
        let (tx, feed) = NotificationFeed::channel();
        tx.send(event("INR 75 received")).unwrap();
        drop(tx);

        assert!(feed.try_next_prefill().is_some());
        assert!(feed.try_next_prefill().is_none());
    }
}
