//! course-table: a single-threaded, separately chained hash table of course
//! records, plus the small loader and menu shell around it.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the table's rules small enough to check by hand: where a
//!   record lands, which record a lookup sees, and when the table grows.
//! - Layers:
//!   - `SlotHasher`: identifier -> raw `u64`. The default `SquaringHasher`
//!     reproduces the course planner's compounding-square hash bit for bit.
//!   - `CourseTable<S>`: bucket array of chains over a generational arena;
//!     insert, search, find, ordered dump.
//!   - `growth`: next-prime capacity arithmetic used by the table's resize.
//!   - `loader` / `menu`: collaborator shell that parses course files and
//!     drives the interactive loop. They only use the public table API.
//!
//! Constraints
//! - Single-threaded: tables are `!Send`/`!Sync` (the reentrancy guard
//!   carries a raw-pointer marker).
//! - Entries are only added, never removed or edited.
//! - Duplicate identifiers are stored; lookups see the first one inserted.
//! - The table grows when `len / capacity` reaches 1.0, to the smallest prime
//!   at least twice the old capacity.
//!
//! Chains and vacancy
//! - A bucket is `Vacant` or `Occupied(Vec<key>)`; there is no sentinel key.
//!   Chain order is insertion order because chains only append.
//! - Each entry keeps the bucket index it was inserted under. It is
//!   diagnostic only and is recomputed when a resize re-inserts the entry.
//!
//! Resizing
//! - A resize builds a fresh table at the new capacity and re-inserts every
//!   record in traversal order (bucket index, then chain order), so records
//!   with equal ids keep their relative order. The old storage is dropped.
//! - Each resize bumps the table generation. `Handle`s carry the generation
//!   they were issued under and stop resolving after a resize instead of
//!   aliasing a new entry.
//! - Doubling is overflow-checked; if it would overflow, growth is skipped
//!   with a warning and records keep chaining at the current capacity.
//!
//! Hash fidelity
//! - The accumulator is 32-bit with wraparound, bytes are read as signed
//!   `char`s, and the result is sign-extended before the modulo. See
//!   `hasher::SquaringHasher`.
//!
//! Reentrancy policy
//! - A custom `SlotHasher` is the only foreign code the table calls. Every
//!   public table method enters a debug-only guard, so a hasher that reaches
//!   back into its own table panics in debug builds rather than observing a
//!   half-linked chain. Release builds compile the guard away.

pub mod course;
pub mod course_table;
mod course_table_proptest;
pub mod error;
pub mod growth;
pub mod hasher;
pub mod loader;
pub mod logger;
pub mod menu;
mod reentrancy;

// Public surface
pub use course::Course;
pub use course_table::{CourseTable, Handle, Iter, DEFAULT_CAPACITY};
pub use error::{LoadError, TableError};
pub use hasher::{SlotHasher, SquaringHasher};
pub use loader::{load_courses, parse_course_line, read_courses, LoadReport};
pub use menu::{write_course, Menu};
