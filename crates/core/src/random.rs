//! Uniform random choice over the builder's seeded stream.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub(crate) fn pick_index(rng: &mut ChaCha8Rng, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((rng.next_u64() % len as u64) as usize)
}

pub(crate) fn pick<T: Copy>(rng: &mut ChaCha8Rng, items: &[T]) -> Option<T> {
    pick_index(rng, items.len()).map(|index| items[index])
}
