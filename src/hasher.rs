//! Bucket hashing for course identifiers.
//!
//! The table does not use `core::hash::Hash`: `str`'s `Hash` impl appends a
//! terminator byte, which would change every bucket index. Instead the table
//! asks a `SlotHasher` for a raw `u64` and reduces it modulo its capacity.

/// Maps an identifier to a raw hash. The table takes it modulo capacity.
///
/// Implementations must be deterministic for the lifetime of a table, since
/// the same hasher (cloned) is reused for every generation after a resize.
pub trait SlotHasher: Clone {
    fn hash_id(&self, id: &str) -> u64;
}

/// The compounding-square hash: for each byte `acc = (acc + byte)^2`.
///
/// Arithmetic is 32-bit two's-complement with wraparound. Each byte is read
/// as a signed `char` and sign-extended before the add, and the final
/// accumulator is sign-extended to 64 bits. The sign extension matters: a
/// negative accumulator reduces modulo the capacity as `2^64 + acc`, not as
/// `2^32 + acc`. `CS101` goes to bucket 15 of 179, not 17.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SquaringHasher;

impl SlotHasher for SquaringHasher {
    #[inline]
    fn hash_id(&self, id: &str) -> u64 {
        let mut acc: u32 = 0;
        for &b in id.as_bytes() {
            acc = acc.wrapping_add(b as i8 as i32 as u32);
            acc = acc.wrapping_mul(acc);
        }
        acc as i32 as i64 as u64
    }
}
