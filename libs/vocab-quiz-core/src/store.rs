//! In-memory vocabulary store with change notification.

use crate::types::VocabularyList;
use std::fmt;

/// Anything that can hand the quiz engine a vocabulary snapshot.
pub trait VocabularySource {
    /// Current vocabulary, or `None` if nothing has been loaded.
    fn vocabulary(&self) -> Option<VocabularyList>;
}

impl VocabularySource for VocabularyList {
    fn vocabulary(&self) -> Option<VocabularyList> {
        Some(self.clone())
    }
}

impl<T: VocabularySource + ?Sized> VocabularySource for &T {
    fn vocabulary(&self) -> Option<VocabularyList> {
        (**self).vocabulary()
    }
}

/// Handle returned by [`VocabularyStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Option<&VocabularyList>)>;

/// Holds the current vocabulary and notifies listeners when it changes.
///
/// Listeners stay registered until [`VocabularyStore::unsubscribe`] is called
/// with their id or the store is dropped.
#[derive(Default)]
pub struct VocabularyStore {
    current: Option<VocabularyList>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for VocabularyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabularyStore")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a vocabulary.
    pub fn with_vocabulary(vocabulary: VocabularyList) -> Self {
        Self {
            current: Some(vocabulary),
            ..Self::default()
        }
    }

    pub fn get(&self) -> Option<&VocabularyList> {
        self.current.as_ref()
    }

    /// Replace the vocabulary and notify listeners.
    pub fn set(&mut self, vocabulary: VocabularyList) {
        tracing::debug!(entries = vocabulary.len(), "vocabulary updated");
        self.current = Some(vocabulary);
        self.notify();
    }

    /// Remove the vocabulary and notify listeners.
    pub fn clear(&mut self) {
        tracing::debug!("vocabulary cleared");
        self.current = None;
        self.notify();
    }

    /// Register a listener called with the new value after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Option<&VocabularyList>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let current = self.current.as_ref();
        for (_, listener) in self.listeners.iter_mut() {
            listener(current);
        }
    }
}

impl VocabularySource for VocabularyStore {
    fn vocabulary(&self) -> Option<VocabularyList> {
        self.current.clone()
    }
}
