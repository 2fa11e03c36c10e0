//! Hash functions for Bloom filter
//!
//! Two base hashes from unrelated algorithm families feed a double-hashing
//! scheme (Kirsch–Mitzenmacher): `index(i) = (h1 + i * h2) mod m`.
//!
//! - `h1`: FNV-1, 32-bit
//! - `h2`: CRC-32 (IEEE polynomial)
//!
//! Both are pure functions over the raw bytes. Nothing is seeded or shared,
//! so they can be called from any thread.

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// FNV-1 32-bit hash (multiply, then XOR)
pub fn fnv1_32(data: &[u8]) -> u32 {
    data.iter().fold(FNV32_OFFSET_BASIS, |hash, &byte| {
        hash.wrapping_mul(FNV32_PRIME) ^ byte as u32
    })
}

/// CRC-32 with the IEEE polynomial
#[inline]
pub fn crc32_ieee(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// The two base hashes of one element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoubleHash {
    pub h1: u32,
    pub h2: u32,
}

impl DoubleHash {
    /// Hash an element once; every probe index is derived from this pair
    pub fn of(element: &[u8]) -> Self {
        Self {
            h1: fnv1_32(element),
            h2: crc32_ieee(element),
        }
    }

    /// Index of probe `i` in a bit array of `m` bits
    ///
    /// `h1 + i * h2` is evaluated exactly in 128 bits and reduced once,
    /// so no intermediate wraps regardless of `i`.
    ///
    /// # Panics
    /// Panics if `m == 0`.
    #[inline]
    pub fn probe_index(&self, i: usize, m: usize) -> usize {
        let sum = self.h1 as u128 + (i as u128) * (self.h2 as u128);
        (sum % m as u128) as usize
    }
}

/// Iterator over the `k` probe indices of one element
#[derive(Clone, Debug)]
pub struct ProbePositions {
    hash: DoubleHash,
    m: usize,
    next: usize,
    k: usize,
}

impl Iterator for ProbePositions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.k {
            return None;
        }
        let index = self.hash.probe_index(self.next, self.m);
        self.next += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.k - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbePositions {}

/// Compute the k probe positions for an element
///
/// Lazy, so `contains` can stop at the first clear bit without deriving
/// the remaining indices.
pub fn probe_positions(element: &[u8], k: usize, m: usize) -> ProbePositions {
    ProbePositions {
        hash: DoubleHash::of(element),
        m,
        next: 0,
        k,
    }
}
