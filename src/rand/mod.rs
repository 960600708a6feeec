//! Random number generation backed by the operating system CSPRNG.
//!
//! Every random choice made while building a password goes through this
//! module. Callers hand in any `RngCore + CryptoRng`, so tests can use a
//! seeded ChaCha stream while the binary uses [`OsRng`].

use rand::{CryptoRng, RngCore};

pub use rand::rngs::OsRng;

/// Human readable name of the default entropy source.
pub fn entropy_source() -> &'static str {
    "OS CSPRNG"
}

/// Returns an index in `[0, n)`.
///
/// A single 32-bit draw is reduced modulo `n`. For `n` that does not divide
/// 2^32 this is slightly biased towards low indices; with alphabets of under a
/// hundred characters the skew is below one part in 40 million and is
/// accepted as a known approximation.
///
/// Panics if `n` is zero.
#[inline]
pub fn random_index<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, n: usize) -> usize {
    assert!(n > 0, "random_index called with an empty range");
    rng.next_u32() as usize % n
}

/// Picks one element uniformly (modulo bias aside) from a non-empty slice.
#[inline]
pub fn sample<T: Copy, R: RngCore + CryptoRng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[random_index(rng, items.len())]
}

/// Fisher-Yates shuffle in place.
#[inline]
pub fn shuffle<T, R: RngCore + CryptoRng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random_index(rng, i + 1);
        items.swap(i, j);
    }
}
