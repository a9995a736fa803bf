use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send {
    // upper must be non-zero; callers only sample non-empty choice sets
    fn pick_index(&mut self, upper: usize) -> usize;

    fn pick_bool(&mut self) -> bool;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn pick_bool(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut first = SessionRng::new(17);
        let mut second = SessionRng::new(17);

        for _ in 0..100 {
            assert_eq!(first.pick_index(9), second.pick_index(9));
            assert_eq!(first.pick_bool(), second.pick_bool());
        }
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        let mut rng = SessionRng::from_random();
        for upper in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick_index(upper) < upper);
            }
        }
    }

    #[test]
    fn test_seed_is_reported() {
        let rng = SessionRng::new(42);
        assert_eq!(rng.seed(), 42);
    }
}
