//! Application-scoped publish/subscribe channel.
//!
//! Replaces ambient `window` events: any component may publish, any component
//! may subscribe, and delivery is synchronous to whoever is subscribed at
//! publish time.

use contracts::domain::common::CartKind;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A cart key was rewritten; re-read it
    CartUpdated(CartKind),
    /// Home hero slide changed; payload is the css gradient token
    HeroGradientChanged(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Handler)>,
}

#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let Ok(mut inner) = self.inner.lock() else {
            return SubscriptionId(u64::MAX);
        };
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.subscribers.push((id, Arc::new(handler)));
        id
    }

    /// Returns `false` when the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Ok(mut inner) = self.inner.lock() else {
            return false;
        };
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(existing, _)| *existing != id);
        inner.subscribers.len() != before
    }

    /// Delivers `event` to the current subscribers and returns how many got it.
    /// Handlers run outside the lock, so they may publish or (un)subscribe.
    pub fn publish(&self, event: &AppEvent) -> usize {
        let handlers: Vec<Handler> = match self.inner.lock() {
            Ok(inner) => inner.subscribers.iter().map(|(_, h)| h.clone()).collect(),
            Err(_) => return 0,
        };
        log::debug!("📣 {:?} -> {} subscriber(s)", event, handlers.len());
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|i| i.subscribers.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_current_subscribers_only() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        let id = bus.subscribe(move |event| {
            if matches!(event, AppEvent::CartUpdated(CartKind::Food)) {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(bus.publish(&AppEvent::CartUpdated(CartKind::Food)), 1);
        assert_eq!(bus.publish(&AppEvent::CartUpdated(CartKind::Shopping)), 1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.publish(&AppEvent::CartUpdated(CartKind::Food)), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_may_publish_reentrantly() {
        let bus = EventBus::new();
        let gradients = Arc::new(Mutex::new(Vec::new()));

        let relay = bus.clone();
        bus.subscribe(move |event| {
            if let AppEvent::CartUpdated(_) = event {
                relay.publish(&AppEvent::HeroGradientChanged("teal".into()));
            }
        });
        let seen = gradients.clone();
        bus.subscribe(move |event| {
            if let AppEvent::HeroGradientChanged(token) = event {
                seen.lock().unwrap().push(token.clone());
            }
        });

        bus.publish(&AppEvent::CartUpdated(CartKind::Shopping));
        assert_eq!(*gradients.lock().unwrap(), vec!["teal".to_string()]);
        assert_eq!(bus.subscriber_count(), 2);
    }
}
