//! A move tree shared between threads, with serialized mutation.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::index::Index;
use crate::node::{Annotation, Move};
use crate::tree::MoveTree;

/// Cloneable handle to one [`MoveTree`] behind an exclusive lock.
///
/// Every structural mutation holds the lock for its whole duration, so no
/// caller ever observes a node inserted but not yet linked. Readers go
/// through [`SharedMoveTree::read`] or take a [`snapshot`](Self::snapshot);
/// there is no isolation beyond what those provide.
#[derive(Debug, Clone, Default)]
pub struct SharedMoveTree {
    inner: Arc<Mutex<MoveTree>>,
}

impl SharedMoveTree {
    /// Wraps `tree` for shared use.
    pub fn new(tree: MoveTree) -> Self {
        SharedMoveTree {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    /// See [`MoveTree::add`].
    pub fn add(&self, mv: Move, parent: Index) -> Index {
        self.lock().add(mv, parent)
    }

    /// See [`MoveTree::remove`].
    pub fn remove(&self, index: Index) -> Vec<Index> {
        self.lock().remove(index)
    }

    /// See [`MoveTree::annotate`].
    pub fn annotate(&self, index: Index, annotation: Annotation) {
        self.lock().annotate(index, annotation)
    }

    /// Runs `f` against the current tree.
    pub fn read<T>(&self, f: impl FnOnce(&MoveTree) -> T) -> T {
        f(&*self.lock())
    }

    /// Copies the current tree out of the lock.
    pub fn snapshot(&self) -> MoveTree {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, MoveTree> {
        // A panic while holding the lock means a mutation stopped halfway.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("move tree lock poisoned by an interrupted mutation"),
        }
    }
}

impl From<MoveTree> for SharedMoveTree {
    fn from(tree: MoveTree) -> Self {
        SharedMoveTree::new(tree)
    }
}
