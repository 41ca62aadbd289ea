use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that yields every key in `0..num` exactly once, in a pseudo-random order
/// determined by `seed`.
///
/// The permutation is drawn lazily: each step picks one of the keys not yet
/// returned (a Fisher-Yates shuffle done one position at a time)
pub struct ShuffledKeys {
    pending: Vec<u64>,
    rng: Pcg64,
}

impl ShuffledKeys {
    pub fn new(num: u64, seed: u64) -> ShuffledKeys {
        ShuffledKeys {
            pending: (0..num).collect(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for ShuffledKeys {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0, self.pending.len());
        Some(self.pending.swap_remove(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.pending.len();
        (size, Some(size))
    }
}

impl FusedIterator for ShuffledKeys {}

impl ExactSizeIterator for ShuffledKeys {}
