//! CourseTable: separate-chaining hash table of `Course` records.
//!
//! Records live in a generational arena; each bucket is either vacant or an
//! ordered chain of arena keys. Chains only grow by appending, so chain order
//! is insertion order. When `len / capacity` reaches 1.0 the whole table is
//! rebuilt at the next prime capacity (see `growth`), which also bumps the
//! table generation so outstanding handles stop resolving.

use crate::course::Course;
use crate::error::TableError;
use crate::growth::{self, MAX_LOAD_FACTOR};
use crate::hasher::{SlotHasher, SquaringHasher};
use crate::reentrancy::DebugReentrancy;
use log::{debug, trace, warn};
use slotmap::{DefaultKey, SlotMap};

/// Bucket count used by `CourseTable::new`.
pub const DEFAULT_CAPACITY: usize = 179;

/// Stable reference to one entry, valid until the table next resizes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle {
    key: DefaultKey,
    generation: u64,
}

impl Handle {
    pub fn course<'a, S: SlotHasher>(&self, table: &'a CourseTable<S>) -> Option<&'a Course> {
        table.handle_entry(*self).map(|e| &e.course)
    }

    /// Bucket index recorded when the entry was inserted.
    pub fn slot<S: SlotHasher>(&self, table: &CourseTable<S>) -> Option<usize> {
        table.handle_entry(*self).map(|e| e.slot)
    }
}

#[derive(Debug)]
struct Entry {
    course: Course,
    slot: usize,
}

#[derive(Debug, Default)]
enum Bucket {
    #[default]
    Vacant,
    Occupied(Vec<DefaultKey>),
}

pub struct CourseTable<S = SquaringHasher> {
    hasher: S,
    buckets: Vec<Bucket>,
    entries: SlotMap<DefaultKey, Entry>,
    // Number of resizes this table has gone through.
    generation: u64,
    reentrancy: DebugReentrancy,
}

impl CourseTable {
    pub fn new() -> Self {
        Self::build(DEFAULT_CAPACITY, SquaringHasher, 0)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Self::with_capacity_and_hasher(capacity, SquaringHasher)
    }
}

impl Default for CourseTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Traversal-order iterator: buckets by index, then each chain in insertion
/// order.
pub struct Iter<'a> {
    buckets: core::slice::Iter<'a, Bucket>,
    chain: core::slice::Iter<'a, DefaultKey>,
    entries: &'a SlotMap<DefaultKey, Entry>,
    generation: u64,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Handle, &'a Course);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&key) = self.chain.next() {
                if let Some(e) = self.entries.get(key) {
                    let handle = Handle {
                        key,
                        generation: self.generation,
                    };
                    return Some((handle, &e.course));
                }
                continue;
            }
            match self.buckets.next()? {
                Bucket::Occupied(chain) => self.chain = chain.iter(),
                Bucket::Vacant => {}
            }
        }
    }
}

impl<S: SlotHasher> CourseTable<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::build(DEFAULT_CAPACITY, hasher, 0)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(Self::build(capacity, hasher, 0))
    }

    // `capacity` must be non-zero.
    fn build(capacity: usize, hasher: S, generation: u64) -> Self {
        debug_assert!(capacity > 0);
        Self {
            hasher,
            buckets: core::iter::repeat_with(Bucket::default)
                .take(capacity)
                .collect(),
            entries: SlotMap::with_key(),
            generation,
            reentrancy: DebugReentrancy::new(),
        }
    }

    fn slot_of(&self, id: &str) -> usize {
        (self.hasher.hash_id(id) % self.buckets.len() as u64) as usize
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `len / capacity`, computed on every call.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// How many resizes produced this table. Starts at 0.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Entries chained at `slot`; 0 for vacant or out-of-range slots.
    pub fn chain_len(&self, slot: usize) -> usize {
        match self.buckets.get(slot) {
            Some(Bucket::Occupied(chain)) => chain.len(),
            _ => 0,
        }
    }

    /// Appends `course` to its bucket's chain, growing the table if it is now
    /// full. Identifiers are not deduplicated: a second record with the same
    /// id is stored but `search` keeps returning the first.
    pub fn insert(&mut self, course: Course) {
        {
            let _g = self.reentrancy.enter();
            let slot = self.slot_of(course.id());
            trace!("insert {} into slot {}", course.id(), slot);
            let key = self.entries.insert(Entry { course, slot });
            let bucket = &mut self.buckets[slot];
            if let Bucket::Occupied(chain) = bucket {
                chain.push(key);
            } else {
                *bucket = Bucket::Occupied(vec![key]);
            }
        }

        if self.load_factor() >= MAX_LOAD_FACTOR {
            self.grow();
        }
    }

    /// Rebuilds the table at the next prime capacity, re-inserting every
    /// record in traversal order. The re-inserts may grow the new table again.
    fn grow(&mut self) {
        debug_assert!(!self.reentrancy.is_busy());
        let Some(capacity) = growth::next_capacity(self.capacity()) else {
            warn!(
                "course table cannot grow past {} buckets; chaining {} entries in place",
                self.capacity(),
                self.len()
            );
            return;
        };
        debug!(
            "resizing course table from {} to {} buckets ({} entries)",
            self.capacity(),
            capacity,
            self.len()
        );

        let next = {
            let _g = self.reentrancy.enter();
            let mut next = Self::build(capacity, self.hasher.clone(), self.generation + 1);
            let buckets = core::mem::take(&mut self.buckets);
            let mut entries = core::mem::take(&mut self.entries);
            for bucket in buckets {
                if let Bucket::Occupied(chain) = bucket {
                    for key in chain {
                        if let Some(e) = entries.remove(key) {
                            next.insert(e.course);
                        }
                    }
                }
            }
            next
        };
        *self = next;
    }

    fn find_key(&self, id: &str) -> Option<DefaultKey> {
        match &self.buckets[self.slot_of(id)] {
            Bucket::Vacant => None,
            Bucket::Occupied(chain) => chain.iter().copied().find(|&k| {
                self.entries
                    .get(k)
                    .map(|e| e.course.id() == id)
                    .unwrap_or(false)
            }),
        }
    }

    /// First record inserted with exactly this id (case-sensitive).
    pub fn search(&self, id: &str) -> Option<&Course> {
        let _g = self.reentrancy.enter();
        self.find_key(id)
            .and_then(|k| self.entries.get(k))
            .map(|e| &e.course)
    }

    pub fn find(&self, id: &str) -> Option<Handle> {
        let _g = self.reentrancy.enter();
        self.find_key(id).map(|key| Handle {
            key,
            generation: self.generation,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        let _g = self.reentrancy.enter();
        self.find_key(id).is_some()
    }

    fn handle_entry(&self, h: Handle) -> Option<&Entry> {
        let _g = self.reentrancy.enter();
        if h.generation != self.generation {
            return None;
        }
        self.entries.get(h.key)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            entries: &self.entries,
            generation: self.generation,
        }
    }

    /// Every record, sorted by id. The sort is stable over traversal order,
    /// so records sharing an id stay in insertion order.
    pub fn entries_ordered(&self) -> Vec<&Course> {
        let _g = self.reentrancy.enter();
        let mut out: Vec<&Course> = self.iter().map(|(_, c)| c).collect();
        out.sort_by(|a, b| a.id().cmp(b.id()));
        out
    }
}
