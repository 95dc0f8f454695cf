//! Push-based cache invalidation.
//!
//! The read layer (UI query caches) subscribes to a [`Notifier`]; every
//! successful mutation publishes the [`CacheKey`]s whose cached reads are
//! now stale. The mutation never returns the fresh aggregate; subscribers
//! are expected to re-run the corresponding read. Keys are published only
//! after the transaction commits, so a subscriber that re-queries
//! immediately always observes the new rows.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use tracing::debug;

/// Identifies one UI-facing read whose cache must be refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The active-checklists-with-progress list.
    ActiveChecklists,
    /// The detail read of one checklist.
    ChecklistDetail(String),
    /// The upcoming-reminders feed.
    Reminders,
}

/// Fan-out hub for invalidation signals.
///
/// Subscribers each get their own channel; publishing clones the key to
/// every live subscriber and prunes ones whose receiver was dropped.
#[derive(Debug, Default)]
pub struct Notifier {
    subscribers: Mutex<Vec<Sender<CacheKey>>>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber lock is poisoned.
    pub fn subscribe(&self) -> Receiver<CacheKey> {
        let (tx, rx) = channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    /// Publish a set of stale keys to all live subscribers.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber lock is poisoned.
    pub fn publish(&self, keys: &[CacheKey]) {
        if keys.is_empty() {
            return;
        }
        debug!(?keys, "publishing cache invalidation");

        let mut subs = self.subscribers.lock().unwrap();
        subs.retain(|tx| keys.iter().all(|key| tx.send(key.clone()).is_ok()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_receives_keys() {
        let notifier = Notifier::new();
        let rx = notifier.subscribe();

        notifier.publish(&[
            CacheKey::ActiveChecklists,
            CacheKey::ChecklistDetail("chk_1".to_string()),
        ]);

        assert_eq!(rx.recv().unwrap(), CacheKey::ActiveChecklists);
        assert_eq!(
            rx.recv().unwrap(),
            CacheKey::ChecklistDetail("chk_1".to_string())
        );
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let notifier = Notifier::new();
        let rx = notifier.subscribe();
        drop(rx);

        // Must not fail or leak: the dead sender is removed on publish.
        notifier.publish(&[CacheKey::Reminders]);
        assert!(notifier.subscribers.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_publish_is_noop() {
        let notifier = Notifier::new();
        let rx = notifier.subscribe();
        notifier.publish(&[]);
        assert!(rx.try_recv().is_err());
    }
}
