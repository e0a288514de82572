//! Multicast event hub
//!
//! An explicit observer list standing in for engine event delegates:
//! subscribers are boxed callbacks invoked in subscription order on
//! every emit, and unsubscribe by the token handed out at registration.

/// Token returned by [`EventHub::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Ordered list of callbacks notified on every emit.
pub struct EventHub<T> {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
}

impl<T> EventHub<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback. Callbacks run in subscription order.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Notify every subscriber.
    pub fn emit(&mut self, event: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emits_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hub = EventHub::new();

        let log = seen.clone();
        hub.subscribe(move |n: &i32| log.borrow_mut().push(("a", *n)));
        let log = seen.clone();
        hub.subscribe(move |n: &i32| log.borrow_mut().push(("b", *n)));

        hub.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut hub = EventHub::new();

        let counter = count.clone();
        let id = hub.subscribe(move |_: &()| *counter.borrow_mut() += 1);

        hub.emit(&());
        assert!(hub.unsubscribe(id));
        hub.emit(&());

        assert_eq!(*count.borrow(), 1);
        assert!(!hub.unsubscribe(id));
        assert!(hub.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_unsubscribes() {
        let mut hub = EventHub::<()>::new();
        let first = hub.subscribe(|_| {});
        hub.unsubscribe(first);
        let second = hub.subscribe(|_| {});
        assert_ne!(first, second);
    }
}
