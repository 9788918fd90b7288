//! # Auth-state notifications
//!
//! The backend's client surface is push-based: every confirmed login and
//! logout is delivered to whoever subscribed, exactly once per transition.
//! [`AuthEvents`] is the hub a backend implementation feeds, and
//! [`AuthSubscription`] is the long-lived handle the auth observer holds for
//! the life of the page session.
//!
//! The hub is a `tokio::sync::watch` channel underneath, so late subscribers
//! immediately observe the current state, and intermediate states that were
//! overwritten before a subscriber woke up are skipped. That matches the
//! mirror's last-write-wins semantics.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::Identity;

/// Hub for auth-state change notifications, one per backend client.
#[derive(Clone, Debug)]
pub struct AuthEvents {
    tx: Arc<watch::Sender<Option<Identity>>>,
}

impl Default for AuthEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthEvents {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Report a backend-confirmed transition to every live subscription.
    pub fn notify(&self, identity: Option<Identity>) {
        self.tx.send_replace(identity);
    }

    /// The identity the backend last reported, if any.
    pub fn current(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    /// Open a long-lived subscription. The state at subscription time is
    /// delivered as the first event, so a subscriber never has to poll.
    pub fn subscribe(&self) -> AuthSubscription {
        let mut rx = self.tx.subscribe();
        rx.mark_changed();
        AuthSubscription { rx, stopped: false }
    }
}

/// Handle on an open auth-state subscription.
pub struct AuthSubscription {
    rx: watch::Receiver<Option<Identity>>,
    stopped: bool,
}

impl AuthSubscription {
    /// Wait for the next auth-state notification.
    ///
    /// Returns `None` once [`stop`](Self::stop) has been called or the
    /// backend client is gone.
    pub async fn next(&mut self) -> Option<Option<Identity>> {
        if self.stopped {
            return None;
        }
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }

    /// Stop receiving notifications.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(uid: &str) -> Identity {
        Identity {
            uid: uid.to_string(),
            email: format!("{uid}@example.com"),
        }
    }

    #[tokio::test]
    async fn test_subscription_starts_with_current_state() {
        let events = AuthEvents::new();
        let mut sub = events.subscribe();

        assert_eq!(sub.next().await, Some(None));

        events.notify(Some(identity("u1")));
        let mut late = events.subscribe();
        assert_eq!(late.next().await, Some(Some(identity("u1"))));
    }

    #[tokio::test]
    async fn test_login_and_logout_are_delivered_in_order() {
        let events = AuthEvents::new();
        let mut sub = events.subscribe();
        sub.next().await;

        events.notify(Some(identity("u1")));
        assert_eq!(sub.next().await, Some(Some(identity("u1"))));

        events.notify(None);
        assert_eq!(sub.next().await, Some(None));
    }

    #[tokio::test]
    async fn test_stopped_subscription_yields_nothing() {
        let events = AuthEvents::new();
        let mut sub = events.subscribe();
        sub.stop();

        events.notify(Some(identity("u1")));
        assert_eq!(sub.next().await, None);
    }
}
