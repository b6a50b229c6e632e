//! Subject/observer plumbing for account alerts
//!
//! A subject keeps an ordered list of non-owning observer handles. Attaching
//! the same observer twice is allowed and yields two deliveries per event.
//! Observers that have been dropped by their owner are skipped and their
//! entries are pruned the next time the list is changed.

use std::fmt;
use std::rc::{Rc, Weak};

/// Receives messages pushed by a subject
pub trait Observer {
    fn update(&self, message: &str);
}

/// Something observers can subscribe to
pub trait Subject {
    /// Add an observer to the end of the list
    ///
    /// Only a weak handle is kept. The caller owns the observer, and once it
    /// is dropped it no longer receives messages or counts as attached.
    fn attach(&mut self, observer: Rc<dyn Observer>);

    /// Remove the first occurrence of an observer
    ///
    /// # Errors
    ///
    /// Returns an error if the observer is not attached.
    fn detach(&mut self, observer: Rc<dyn Observer>) -> crate::error::BankResult<()>;

    /// Deliver a message to every attached observer, in attachment order
    fn notify(&self, message: &str);
}

/// Ordered, non-owning list of observers
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Weak<dyn Observer>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a weak handle to `observer`
    pub fn push(&mut self, observer: &Rc<dyn Observer>) {
        self.prune();
        self.observers.push(Rc::downgrade(observer));
    }

    /// Remove the first entry pointing at `observer`; false if absent
    pub fn remove(&mut self, observer: &Rc<dyn Observer>) -> bool {
        self.prune();
        let target = Rc::as_ptr(observer) as *const ();
        match self
            .observers
            .iter()
            .position(|w| w.as_ptr() as *const () == target)
        {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Deliver `message` and return how many live observers received it
    pub fn notify(&self, message: &str) -> usize {
        // Snapshot so an observer reacting to the message cannot disturb the walk
        let snapshot: Vec<Rc<dyn Observer>> =
            self.observers.iter().filter_map(Weak::upgrade).collect();

        for observer in &snapshot {
            observer.update(message);
        }

        snapshot.len()
    }

    /// Number of entries whose observer is still alive
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) {
        self.observers.retain(|w| w.strong_count() > 0);
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("len", &self.len())
            .finish()
    }
}
