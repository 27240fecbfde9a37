use alloc::vec::Vec;

use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Deterministic pseudo-random payload of `size` bytes.
#[must_use]
pub fn make_message(size: usize, seed: u64) -> Vec<u8> {
    let mut xoshiro = Xoshiro256StarStar::seed_from_u64(seed);
    let mut message = alloc::vec![0; size];
    xoshiro.fill_bytes(&mut message);
    message
}

#[test]
fn test_make_message_is_deterministic() {
    assert_eq!(make_message(64, 7), make_message(64, 7));
    assert_ne!(make_message(64, 7), make_message(64, 8));
    assert_eq!(make_message(13, 1).len(), 13);
}
