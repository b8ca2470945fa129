//! Change notification between the editor and the form that owns the list.
//!
//! The owner holds the authoritative list. The editor reads the current value,
//! computes a replacement for every mutation and publishes it through a
//! [`RemappingBinding`]. There is no buffering and no commit step: the owner
//! sees each new value as soon as it is published.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::ClaimRemappingList;

/// Two-way binding to the owner's remapping list.
pub trait RemappingBinding {
    /// The owner's current list.
    fn current(&self) -> ClaimRemappingList;

    /// Hand a new list value to the owner.
    fn publish(&mut self, next: ClaimRemappingList);
}

#[derive(Debug, Default)]
struct SharedState {
    list: ClaimRemappingList,
    revision: u64,
}

/// Single-threaded co-owned binding.
///
/// Clones share the same state, so the owner keeps one handle and gives
/// another to the editor.
#[derive(Debug, Clone, Default)]
pub struct SharedRemappings {
    state: Rc<RefCell<SharedState>>,
}

impl SharedRemappings {
    #[must_use]
    pub fn new(list: ClaimRemappingList) -> Self {
        Self {
            state: Rc::new(RefCell::new(SharedState { list, revision: 0 })),
        }
    }

    #[must_use]
    pub fn get(&self) -> ClaimRemappingList {
        self.state.borrow().list.clone()
    }

    /// Number of values published so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    /// Replace the list from the owner's side, e.g. after reloading a record.
    pub fn replace(&self, list: ClaimRemappingList) {
        let mut state = self.state.borrow_mut();
        state.list = list;
        state.revision += 1;
    }
}

impl RemappingBinding for SharedRemappings {
    fn current(&self) -> ClaimRemappingList {
        self.get()
    }

    fn publish(&mut self, next: ClaimRemappingList) {
        self.replace(next);
    }
}

/// Binding that keeps the latest value and reports each publish to a callback.
pub struct CallbackBinding<F>
where
    F: FnMut(&ClaimRemappingList),
{
    list: ClaimRemappingList,
    on_change: F,
}

impl<F> CallbackBinding<F>
where
    F: FnMut(&ClaimRemappingList),
{
    pub fn new(list: ClaimRemappingList, on_change: F) -> Self {
        Self { list, on_change }
    }

    #[must_use]
    pub fn into_list(self) -> ClaimRemappingList {
        self.list
    }
}

impl<F> RemappingBinding for CallbackBinding<F>
where
    F: FnMut(&ClaimRemappingList),
{
    fn current(&self) -> ClaimRemappingList {
        self.list.clone()
    }

    fn publish(&mut self, next: ClaimRemappingList) {
        (self.on_change)(&next);
        self.list = next;
    }
}
