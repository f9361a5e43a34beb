//! Subscription handles

use std::rc::Weak;

/// Implemented by cells that can drop a subscriber by id
pub(crate) trait Unsubscribe {
    fn unsubscribe(&self, id: u64);
}

/// Keeps a subscriber attached to its cell.
///
/// The subscriber is detached when this handle is dropped or cancelled.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    source: Option<Weak<dyn Unsubscribe>>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(source: Weak<dyn Unsubscribe>, id: u64) -> Self {
        Self {
            source: Some(source),
            id,
        }
    }

    /// Detach the subscriber now
    pub fn cancel(&mut self) {
        if let Some(source) = self.source.take().and_then(|weak| weak.upgrade()) {
            source.unsubscribe(self.id);
        }
    }

    /// Whether the subscriber is still attached to a live cell
    pub fn is_active(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Move this subscription into a bag that owns it
    pub fn store_in(self, bag: &mut Subscriptions) {
        bag.push(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// A bag of subscriptions cancelled together when dropped
#[derive(Debug, Default)]
pub struct Subscriptions {
    items: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.items.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
