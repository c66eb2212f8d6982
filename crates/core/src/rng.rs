use rand::rngs::{OsRng, StdRng};
use rand::{seq::SliceRandom, Rng, RngCore, SeedableRng};

/// Random state for one card source.
///
/// The generator is created on the first draw, never before and never twice. A state built with
/// [`RngState::from_entropy`] pulls its seed from the OS at that moment; the resolved seed is kept
/// so a round can be replayed with [`RngState::from_seed`].
#[derive(Debug, Clone, Default)]
pub struct RngState {
    seed: Option<u64>,
    rng: Option<StdRng>,
}

impl RngState {
    pub fn from_entropy() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: None,
        }
    }

    /// The seed in use, once known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_seeded(&self) -> bool {
        self.rng.is_some()
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng().next_u64()
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng().gen_range(0..len)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self.rng());
    }

    fn rng(&mut self) -> &mut StdRng {
        let seed = &mut self.seed;
        self.rng.get_or_insert_with(|| {
            let value = *seed.get_or_insert_with(|| OsRng.next_u64());
            log::debug!("rng seeded with {value:#x}");
            StdRng::seed_from_u64(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_lazily_and_only_once() {
        let mut rng = RngState::from_entropy();
        assert!(!rng.is_seeded());
        assert_eq!(rng.seed(), None);

        rng.next_u64();
        let seed = rng.seed();
        assert!(rng.is_seeded());
        assert!(seed.is_some());

        for _ in 0..16 {
            rng.index(13);
        }
        assert_eq!(rng.seed(), seed);
    }

    #[test]
    fn fixed_seed_reproduces_sequence() {
        let mut left = RngState::from_seed(0xC0FFEE);
        let mut right = RngState::from_seed(0xC0FFEE);
        let a: Vec<usize> = (0..32).map(|_| left.index(13)).collect();
        let b: Vec<usize> = (0..32).map(|_| right.index(13)).collect();
        assert_eq!(a, b);
        assert_eq!(left.seed(), Some(0xC0FFEE));
    }
}
