//! Display-list handles and the per-context storage behind them.
//!
//! A [`DisplayList`] is the only owner-side reference to a list. Dropping it
//! queues the id on the owning registry's release channel; the registry
//! frees the payload the next time the context collects releases. A handle
//! cannot be cloned, so every list is released exactly once.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use super::ContextError;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one list within one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId {
    context: u64,
    index: u64,
}

impl ListId {
    pub fn index(&self) -> u64 {
        self.index
    }
}

/// Owned handle to a context-side display list.
#[derive(Debug)]
pub struct DisplayList {
    id: ListId,
    face_count: usize,
    release: Sender<ListId>,
}

impl DisplayList {
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Number of triangles the list replays.
    pub fn face_count(&self) -> usize {
        self.face_count
    }
}

impl Drop for DisplayList {
    fn drop(&mut self) {
        // A closed channel means the context is gone and took the list with it.
        let _ = self.release.send(self.id);
    }
}

/// Context-side list storage keyed by [`ListId`].
pub struct ListRegistry<T> {
    context: u64,
    next_index: u64,
    entries: HashMap<u64, T>,
    release_tx: Sender<ListId>,
    release_rx: Receiver<ListId>,
}

impl<T> ListRegistry<T> {
    pub fn new() -> Self {
        let (release_tx, release_rx) = mpsc::channel();
        Self {
            context: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            next_index: 1,
            entries: HashMap::new(),
            release_tx,
            release_rx,
        }
    }

    /// Store a fully built payload and hand out its handle.
    pub fn insert(&mut self, payload: T, face_count: usize) -> DisplayList {
        let index = self.next_index;
        self.next_index += 1;
        self.entries.insert(index, payload);

        DisplayList {
            id: ListId {
                context: self.context,
                index,
            },
            face_count,
            release: self.release_tx.clone(),
        }
    }

    pub fn get(&self, list: &DisplayList) -> Result<&T, ContextError> {
        let id = list.id();
        if id.context != self.context {
            return Err(ContextError::ForeignList(id.index));
        }
        self.entries
            .get(&id.index)
            .ok_or(ContextError::UnknownList(id.index))
    }

    /// Free every list whose handle has been dropped. Returns how many were freed.
    pub fn collect_released(&mut self) -> usize {
        let mut freed = 0;
        while let Ok(id) = self.release_rx.try_recv() {
            if self.entries.remove(&id.index).is_some() {
                tracing::debug!(list = id.index, "released display list");
                freed += 1;
            }
        }
        freed
    }

    /// Number of lists currently held, including released ones not yet collected.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for ListRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
