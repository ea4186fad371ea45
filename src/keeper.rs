//! Process-wide, per-type cache of lookup indexes.
//!
//! Lifecycle: an index is built the first time any operation is requested for
//! its enumeration type, and is then kept, unmodified, until the process ends.
//! There is no teardown. The map lock only hands out one slot per type; the
//! build itself runs on that slot, outside the map lock, so each type is built
//! exactly once and a provider may read other enumerations while it is built.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lazy_static::lazy_static;
use tracing::trace;

use crate::lookup::{IndexHasher, LookupIndex};
use crate::metadata::Enumeration;

type Kept = Arc<dyn Any + Send + Sync>;
type Slot<E> = OnceLock<Arc<LookupIndex<E>>>;

// ------------- IndexKeeper -------------
#[derive(Debug, Default)]
pub struct IndexKeeper {
    kept: RwLock<HashMap<TypeId, Kept, IndexHasher>>,
}

impl IndexKeeper {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns the index for `E`, building it on first use.
    pub fn keep<E: Enumeration>(&self) -> Arc<LookupIndex<E>> {
        let slot = self.slot::<E>();
        Arc::clone(slot.get_or_init(|| {
            trace!(enumeration = E::NAME, "first access, building lookup index");
            Arc::new(LookupIndex::<E>::load())
        }))
    }
    /// True once the index for `E` has been built.
    pub fn contains<E: Enumeration>(&self) -> bool {
        let kept = self.read().get(&TypeId::of::<E>()).map(Arc::clone);
        kept.is_some_and(|kept| downcast::<E>(kept).get().is_some())
    }
    pub fn len(&self) -> usize {
        self.read().len()
    }
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
    fn slot<E: Enumeration>(&self) -> Arc<Slot<E>> {
        let key = TypeId::of::<E>();
        let kept = self.read().get(&key).map(Arc::clone);
        let kept = match kept {
            Some(kept) => kept,
            None => {
                let mut kept = self.write();
                // another caller may have added the slot while we waited for the lock
                let entry = kept
                    .entry(key)
                    .or_insert_with(|| -> Kept { Arc::new(Slot::<E>::new()) });
                Arc::clone(entry)
            }
        };
        downcast::<E>(kept)
    }
    // slots are inserted empty and filled outside the lock, so a poisoned map is still consistent
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Kept, IndexHasher>> {
        self.kept.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Kept, IndexHasher>> {
        self.kept.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// slots are keyed by the TypeId of the very type they hold
fn downcast<E: Enumeration>(kept: Kept) -> Arc<Slot<E>> {
    match kept.downcast::<Slot<E>>() {
        Ok(slot) => slot,
        Err(_) => unreachable!("index slot for {} holds another type", E::NAME),
    }
}

lazy_static! {
    static ref INDEXES: IndexKeeper = IndexKeeper::new();
}

/// The keeper shared by every [`Dnum`](crate::Dnum) operation.
pub fn indexes() -> &'static IndexKeeper {
    &INDEXES
}
