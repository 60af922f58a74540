use std::cell::RefCell;
use std::sync::{Arc, Weak};

use crate::array::coord::CachePolicy;
use crate::scalar::Coordinate;

#[derive(Debug)]
enum Slot {
    Empty,
    Strong(Arc<[Coordinate]>),
    Weak(Weak<[Coordinate]>),
}

/// Lazily built array of materialized points for a packed sequence.
///
/// An empty slot is the dirty state: [`invalidate`](Self::invalidate) takes `&mut self` and
/// empties it before the mutator that called it touches the buffer, and the next read rebuilds.
/// Under [`CachePolicy::Reclaimable`] the slot may also empty itself between reads when the last
/// handle to the array is dropped.
///
/// The slot is a plain `RefCell`, so the cache (and every sequence holding one) is `Send` but not
/// `Sync`. Sharing a sequence between threads needs an outer lock chosen by the caller. The borrow
/// is never held while the build closure runs.
#[derive(Debug)]
pub(crate) struct PointCache {
    policy: CachePolicy,
    slot: RefCell<Slot>,
}

impl PointCache {
    pub(crate) fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            slot: RefCell::new(Slot::Empty),
        }
    }

    pub(crate) fn policy(&self) -> CachePolicy {
        self.policy
    }

    fn read(slot: &mut Slot) -> Option<Arc<[Coordinate]>> {
        match slot {
            Slot::Empty => None,
            Slot::Strong(coords) => Some(coords.clone()),
            Slot::Weak(weak) => {
                let coords = weak.upgrade();
                if coords.is_none() {
                    tracing::trace!("point cache reclaimed");
                    *slot = Slot::Empty;
                }
                coords
            }
        }
    }

    /// The cached array, if one is currently live.
    pub(crate) fn get(&self) -> Option<Arc<[Coordinate]>> {
        Self::read(&mut self.slot.borrow_mut())
    }

    /// Return the cached array, building and storing it first if there is none.
    pub(crate) fn get_or_build<F>(&self, build: F) -> Arc<[Coordinate]>
    where
        F: FnOnce() -> Vec<Coordinate>,
    {
        if self.policy == CachePolicy::Disabled {
            return build().into();
        }
        if let Some(coords) = self.get() {
            return coords;
        }

        let coords: Arc<[Coordinate]> = build().into();
        tracing::trace!(points = coords.len(), "materialized point cache");
        *self.slot.borrow_mut() = match self.policy {
            CachePolicy::Reclaimable => Slot::Weak(Arc::downgrade(&coords)),
            _ => Slot::Strong(coords.clone()),
        };
        coords
    }

    /// Drop the cached array; the buffer it was built from is about to change.
    pub(crate) fn invalidate(&mut self) {
        let slot = self.slot.get_mut();
        if !matches!(slot, Slot::Empty) {
            tracing::trace!("point cache invalidated");
        }
        *slot = Slot::Empty;
    }

    /// Give up the cached array without any mutation having happened.
    pub(crate) fn release(&self) {
        *self.slot.borrow_mut() = Slot::Empty;
    }

    pub(crate) fn is_cached(&self) -> bool {
        self.get().is_some()
    }
}

impl Clone for PointCache {
    /// A clone starts out empty; it is rebuilt against the clone's own buffer.
    fn clone(&self) -> Self {
        Self::new(self.policy)
    }
}
