//! OS-backed random byte sources for salts and tokens.

use rand::distributions::Uniform;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// `length` bytes from the OS CSPRNG, each in `1..=255`.
pub(crate) fn non_zero_bytes(length: usize) -> Vec<u8> {
    let range = Uniform::new_inclusive(1u8, u8::MAX);
    OsRng.sample_iter(range).take(length).collect()
}

/// `length` uniformly distributed bytes from the OS CSPRNG.
pub(crate) fn uniform_bytes(length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
