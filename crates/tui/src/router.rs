//! In-process router used by the demo application and tests.
//!
//! Keeps a browser-like history stack. Programmatic navigation truncates
//! the forward history and queues an application-channel change; history
//! traversal moves the cursor and queues a history-channel change. The
//! host runtime drains the queue and delivers each change to subscribed
//! components.

use std::collections::VecDeque;

use navrail_types::{RouteChange, RouteOrigin, RouteSubscription, Router};
use tracing::debug;

/// Location reported when the history is somehow empty.
const ROOT: &str = "/";

#[derive(Debug, Default)]
pub struct MemoryRouter {
    history: Vec<String>,
    cursor: usize,
    pending: VecDeque<RouteChange>,
    subscribers: Vec<RouteSubscription>,
    next_subscription: u64,
}

impl MemoryRouter {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
            ..Self::default()
        }
    }

    /// Moves one step back in history, queueing a history-channel change.
    /// No-op at the oldest entry.
    pub fn back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.queue(RouteOrigin::History);
        }
    }

    /// Moves one step forward in history, queueing a history-channel
    /// change. No-op at the newest entry.
    pub fn forward(&mut self) {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            self.queue(RouteOrigin::History);
        }
    }

    /// Takes all queued route changes, oldest first.
    pub fn drain_changes(&mut self) -> Vec<RouteChange> {
        self.pending.drain(..).collect()
    }

    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    fn queue(&mut self, origin: RouteOrigin) {
        let location = self.location();
        debug!(?origin, location, "route changed");
        self.pending.push_back(RouteChange { origin, location });
    }
}

impl Router for MemoryRouter {
    fn navigate(&mut self, path: &str) {
        self.history.truncate(self.cursor + 1);
        self.history.push(path.to_string());
        self.cursor = self.history.len() - 1;
        self.queue(RouteOrigin::App);
    }

    fn location(&self) -> String {
        self.history.get(self.cursor).cloned().unwrap_or_else(|| ROOT.to_string())
    }

    fn subscribe(&mut self) -> RouteSubscription {
        self.next_subscription += 1;
        let subscription = RouteSubscription(self.next_subscription);
        self.subscribers.push(subscription);
        subscription
    }

    fn unsubscribe(&mut self, subscription: RouteSubscription) {
        self.subscribers.retain(|s| *s != subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_queues_app_channel_change() {
        let mut router = MemoryRouter::new("/home");
        router.navigate("/reports");

        assert_eq!(router.location(), "/reports");
        let changes = router.drain_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].origin, RouteOrigin::App);
        assert_eq!(changes[0].location, "/reports");
        assert!(router.drain_changes().is_empty());
    }

    #[test]
    fn back_and_forward_traverse_history() {
        let mut router = MemoryRouter::new("/a");
        router.navigate("/b");
        router.navigate("/c");
        router.drain_changes();

        router.back();
        assert_eq!(router.location(), "/b");
        router.back();
        assert_eq!(router.location(), "/a");
        router.back();
        assert_eq!(router.location(), "/a", "no-op at the oldest entry");

        router.forward();
        assert_eq!(router.location(), "/b");

        let changes = router.drain_changes();
        assert_eq!(changes.len(), 3);
        assert!(changes.iter().all(|c| c.origin == RouteOrigin::History));
    }

    #[test]
    fn navigate_truncates_forward_history() {
        let mut router = MemoryRouter::new("/a");
        router.navigate("/b");
        router.navigate("/c");
        router.back();
        router.navigate("/d");

        router.forward();
        assert_eq!(router.location(), "/d", "/c was discarded");
        router.back();
        assert_eq!(router.location(), "/b");
    }

    #[test]
    fn subscriptions_are_individually_released() {
        let mut router = MemoryRouter::new("/");
        let first = router.subscribe();
        let second = router.subscribe();
        assert_ne!(first, second);
        assert!(router.has_subscribers());

        router.unsubscribe(first);
        assert!(router.has_subscribers());
        router.unsubscribe(second);
        assert!(!router.has_subscribers());
    }
}
