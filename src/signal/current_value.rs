//! Current-value cells with replay-one subscription

use super::subscription::{Subscription, Unsubscribe};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Subscriber<T> {
    id: u64,
    callback: Callback<T>,
}

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<Subscriber<T>>,
    /// Set while a delivery loop is running
    notifying: bool,
    /// Values waiting for the running delivery loop
    queued: VecDeque<T>,
}

impl<T> Inner<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.iter().any(|s| s.id == id)
    }
}

impl<T: 'static> Unsubscribe for RefCell<Inner<T>> {
    fn unsubscribe(&self, id: u64) {
        self.borrow_mut().subscribers.retain(|s| s.id != id);
    }
}

/// A mutable cell that remembers its latest value.
///
/// Subscribing delivers the current value immediately, then every later
/// [`set`](CurrentValue::set), in subscription order and synchronously
/// within the `set` call. A `set` made by a subscriber while values are
/// being delivered is queued behind the running delivery, so every
/// subscriber sees values in the order they were set and ends on the
/// cell's current value. Clones share the same cell.
pub struct CurrentValue<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for CurrentValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> CurrentValue<T> {
    /// Create a cell holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                queued: VecDeque::new(),
            })),
        }
    }

    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Store a new value and notify every active subscriber
    #[allow(dead_code)]
    pub fn set(&self, value: T) {
        self.replace(value);
        self.notify();
    }

    /// Store a new value without notifying; pair with [`notify`](Self::notify)
    pub(crate) fn replace(&self, value: T) {
        self.inner.borrow_mut().value = value;
    }

    /// Subscribe to the current value and all later updates
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Subscriber {
                id,
                callback: Rc::clone(&callback),
            });
            (id, inner.value.clone())
        };

        (*callback.borrow_mut())(&current);

        let weak: Weak<dyn Unsubscribe> = Rc::downgrade(&self.inner) as Weak<dyn Unsubscribe>;
        Subscription::new(weak, id)
    }

    /// Number of live subscriptions
    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Read-only handle onto this cell
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            source: self.clone(),
        }
    }

    /// Deliver the current value to every active subscriber
    pub(crate) fn notify(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            let value = inner.value.clone();
            inner.queued.push_back(value);
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }

        loop {
            let next = self.inner.borrow_mut().queued.pop_front();
            let Some(value) = next else {
                break;
            };
            self.deliver(&value);
        }

        self.inner.borrow_mut().notifying = false;
    }

    fn deliver(&self, value: &T) {
        // Release the borrow before calling out so callbacks may read the
        // cell, set it, subscribe or cancel.
        let pending: Vec<(u64, Callback<T>)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|s| (s.id, Rc::clone(&s.callback)))
            .collect();

        for (id, callback) in pending {
            if !self.inner.borrow().is_subscribed(id) {
                continue;
            }
            // A subscriber still inside its replay call is skipped; it
            // already holds the current value.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (*callback)(value);
            }
        }
    }
}

impl<T: Clone + Default + 'static> Default for CurrentValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + std::fmt::Debug + 'static> std::fmt::Debug for CurrentValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("CurrentValue")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Read-only view of a [`CurrentValue`], used for derived signals
pub struct ReadSignal<T> {
    source: CurrentValue<T>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: Clone + 'static> ReadSignal<T> {
    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.source.get()
    }

    /// Subscribe to the current value and all later updates
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        self.source.subscribe(callback)
    }

    /// Subscribe, but only deliver values accepted by `predicate`
    pub fn subscribe_filtered(
        &self,
        mut predicate: impl FnMut(&T) -> bool + 'static,
        mut callback: impl FnMut(&T) + 'static,
    ) -> Subscription {
        self.source.subscribe(move |value| {
            if predicate(value) {
                callback(value);
            }
        })
    }
}

impl<T: Clone + std::fmt::Debug + 'static> std::fmt::Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ReadSignal").field(&self.source).finish()
    }
}
