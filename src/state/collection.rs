//! Ordered record collection keyed by string identifier.
//!
//! Resource containers apply backend-confirmed mutations here; nothing else
//! writes to it.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

/// A record with a stable identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> Collection<T> {
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the record with the same id in place. Returns `false` and
    /// leaves the collection untouched if there is none.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => false,
        }
    }

    /// Remove every record with `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}
