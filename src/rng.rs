use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source used to shuffle decks.
///
/// Seeded sources reproduce the same deck order across runs and platforms.
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl DeckRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Seed this source was created from, `None` when drawn from entropy.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngCore for DeckRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
