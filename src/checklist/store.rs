use super::models::{normalize_name, Item, ItemId, Locale};
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("position {position} is out of range for a list of {len} items")]
    OutOfRange { position: usize, len: usize },
}

/// Handle returned by [`ItemStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(&[Item])>;

/// Ordered, in-memory owner of the checklist.
///
/// Every mutation goes through this type. Observers are called synchronously,
/// in registration order, after each change that actually happened; rejected
/// or no-op calls notify nobody.
pub struct ItemStore {
    items: Vec<Item>,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn seeded(locale: Locale) -> Self {
        Self::new(Item::seed(locale))
    }

    /// Snapshot of the current items.
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_checked()).count()
    }

    pub fn add(&mut self, name: &str) -> Option<Item> {
        let name = normalize_name(name)?;
        let item = Item::new(name, false);
        debug!(id = %item.id(), name = item.name(), "item added");
        self.items.push(item.clone());
        self.notify();
        Some(item)
    }

    pub fn rename(&mut self, id: ItemId, new_name: &str) -> Option<Item> {
        let name = normalize_name(new_name)?;
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.set_name(name);
        let updated = item.clone();
        debug!(%id, name = updated.name(), "item renamed");
        self.notify();
        Some(updated)
    }

    pub fn toggle_checked(&mut self, id: ItemId) -> Option<Item> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.toggle();
        let updated = item.clone();
        debug!(%id, checked = updated.is_checked(), "item toggled");
        self.notify();
        Some(updated)
    }

    pub fn remove_at(&mut self, position: usize) -> Result<Item, StoreError> {
        if position >= self.items.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(position);
        debug!(id = %removed.id(), position, "item removed");
        self.notify();
        Ok(removed)
    }

    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&[Item]) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Returns `false` if the handle was already unsubscribed.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.items);
        }
    }
}

impl fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStore")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}
