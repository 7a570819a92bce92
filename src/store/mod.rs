//! In-memory entity store.
//!
//! Four independent keyed tables, each safe for concurrent read/write and
//! each owning its own id allocator. Individual table calls are
//! linearizable; multi-step sequences (check duplicate, then insert) take
//! the table's write guard so the whole sequence commits atomically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{ClassSlot, Group, Student, Teacher};

/// Monotonic id source for one table.
///
/// Seeded from the maximum key present at construction, so ids stay
/// unique and strictly increasing even when entities are deleted and the
/// store is later re-seeded.
#[derive(Debug)]
pub struct IdAllocator {
    counter: AtomicU64,
}

impl IdAllocator {
    pub fn new(seed: u64) -> Self {
        Self {
            counter: AtomicU64::new(seed),
        }
    }

    /// Next unique id. Concurrent callers receive strictly distinct,
    /// increasing values.
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// One keyed collection with last-writer-wins `insert` semantics.
pub struct Table<T> {
    entries: RwLock<HashMap<u64, T>>,
    ids: IdAllocator,
}

impl<T: Clone + PartialEq> Table<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ids: IdAllocator::new(0),
        }
    }

    /// Builds a table around existing rows; the allocator continues from
    /// the maximum key present.
    pub fn seeded(entries: HashMap<u64, T>) -> Self {
        let max = entries.keys().copied().max().unwrap_or(0);
        Self {
            entries: RwLock::new(entries),
            ids: IdAllocator::new(max),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.ids.next()
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.entries.read().unwrap().get(&id).cloned()
    }

    pub fn insert(&self, id: u64, value: T) {
        self.entries.write().unwrap().insert(id, value);
    }

    pub fn remove(&self, id: u64) -> Option<T> {
        self.entries.write().unwrap().remove(&id)
    }

    pub fn values(&self) -> Vec<T> {
        self.entries.read().unwrap().values().cloned().collect()
    }

    pub fn contains_key(&self, id: u64) -> bool {
        self.entries.read().unwrap().contains_key(&id)
    }

    /// Membership by value-equality, not by key. Linear scan; the
    /// collections stay small enough that an index is not warranted.
    pub fn contains_value(&self, value: &T) -> bool {
        self.entries.read().unwrap().values().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Read guard over the underlying map, for multi-step predicates that
    /// must observe one consistent snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, HashMap<u64, T>> {
        self.entries.read().unwrap()
    }

    /// Write guard over the underlying map. Services hold this across
    /// check-then-commit sequences so concurrent writers cannot slip
    /// between the validation and the mutation.
    pub fn write(&self) -> RwLockWriteGuard<'_, HashMap<u64, T>> {
        self.entries.write().unwrap()
    }
}

impl<T: Clone + PartialEq> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The in-memory database: one table per entity kind.
#[derive(Default)]
pub struct MemoryDb {
    pub students: Table<Student>,
    pub teachers: Table<Teacher>,
    pub groups: Table<Group>,
    pub timetables: Table<ClassSlot>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}
