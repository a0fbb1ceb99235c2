//! Screen change notifications.

use tokio::sync::broadcast;

use crate::constants::notify::CHANNEL_CAPACITY;

/// Fire-and-forget signal that the screen state changed.
///
/// Listeners fetch the new state themselves.
pub trait ChangeNotifier: Send + Sync {
    /// Announce a committed change. Must not fail.
    fn notify_screen_changed(&self);
}

/// Payload broadcast to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChanged;

/// Broadcasts changes over a tokio channel.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<ScreenChanged>,
}

impl BroadcastNotifier {
    /// Create a notifier with the default channel capacity.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Register a listener.
    pub fn subscribe(&self) -> broadcast::Receiver<ScreenChanged> {
        self.sender.subscribe()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier for BroadcastNotifier {
    fn notify_screen_changed(&self) {
        if self.sender.send(ScreenChanged).is_err() {
            tracing::trace!("Screen changed with no listeners");
        }
    }
}

/// Discards notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl ChangeNotifier for NoopNotifier {
    fn notify_screen_changed(&self) {}
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn broadcast_reaches_subscribers() {
        let notifier = BroadcastNotifier::new();
        let mut rx = notifier.subscribe();
        assert_eq!(notifier.listener_count(), 1);

        notifier.notify_screen_changed();
        assert_eq!(rx.try_recv().unwrap(), ScreenChanged);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn broadcast_without_listeners_is_silent() {
        let notifier = BroadcastNotifier::new();
        notifier.notify_screen_changed();
        NoopNotifier.notify_screen_changed();
    }
}
