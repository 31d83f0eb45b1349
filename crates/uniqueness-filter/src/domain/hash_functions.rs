//! Seeded hash family for the membership filter
//!
//! Each of the k hash functions is MurmurHash3 (x86, 32-bit) seeded with
//! its own index `0..k`. Distinct seeds give independent outputs, which is
//! what keeps collisions uncorrelated across positions.

use std::io::Cursor;

/// Hash an element with 32-bit MurmurHash3 under the given seed
///
/// The digest is returned as a signed integer so that reducing it with
/// [`reduce_to_position`] places values the same way signed-hash
/// implementations of this filter do.
pub fn murmur_hash(element: &[u8], seed: u32) -> i32 {
    let mut cursor = Cursor::new(element);
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0) as i32
}

/// Map a signed hash onto `[0, m)` with Euclidean remainder
pub fn reduce_to_position(hash: i32, m: usize) -> usize {
    i64::from(hash).rem_euclid(m as i64) as usize
}

/// Compute k bit positions for an element
///
/// Position `i` comes from the hash function seeded with `i`.
/// Same element, same k and same m always give the same sequence.
pub fn compute_hash_positions(element: &[u8], k: usize, m: usize) -> Vec<usize> {
    (0..k)
        .map(|i| reduce_to_position(murmur_hash(element, i as u32), m))
        .collect()
}
