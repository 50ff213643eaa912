use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::trace::{Op, TraceConfig};

/// A fuzzer for generating tree operation traces.
///
/// Uses the xoshiro256** PRNG, so a fuzzer built from a known seed replays
/// the exact same trace. Failing runs print [`Fuzzer::seed`] to make that
/// possible.
///
/// # Examples
///
/// ```
/// use avl_forest_util::{Fuzzer, TraceConfig};
///
/// let mut fuzzer = Fuzzer::from_u64(7);
/// let trace = fuzzer.trace(&TraceConfig::default());
/// assert_eq!(trace.len(), TraceConfig::default().len);
///
/// let again = Fuzzer::from_u64(7).trace(&TraceConfig::default());
/// assert_eq!(trace, again);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a fuzzer whose seed is `n` repeated in little-endian order.
    pub fn from_u64(n: u64) -> Self {
        let mut seed = [0u8; 32];
        for chunk in seed.chunks_exact_mut(8) {
            chunk.copy_from_slice(&n.to_le_bytes());
        }
        Self::new(Some(seed))
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Shuffle `values` in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /// Every integer of `[min, max]` exactly once, in random order.
    pub fn permutation(&mut self, min: i64, max: i64) -> Vec<i64> {
        let mut values: Vec<i64> = (min..=max).collect();
        self.shuffle(&mut values);
        values
    }

    /// A single operation drawn according to `config`.
    pub fn op(&mut self, config: &TraceConfig) -> Op {
        let v = self.random_int(config.min, config.max);
        if self.random_bool(config.insert_probability) {
            return Op::Insert(v);
        }
        match self.rng.gen_range(0..8) {
            0 => Op::PopFirst,
            1 => Op::PopLast,
            2 | 3 => Op::Find(v),
            _ => Op::Remove(v),
        }
    }

    /// A full trace of `config.len` operations.
    pub fn trace(&mut self, config: &TraceConfig) -> Vec<Op> {
        (0..config.len).map(|_| self.op(config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzer_random_int() {
        let mut fuzzer = Fuzzer::new(None);

        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_pick() {
        let mut fuzzer = Fuzzer::new(None);
        let choices = vec!["a", "b", "c"];

        for _ in 0..100 {
            let picked = fuzzer.pick(&choices);
            assert!(choices.contains(picked));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let seed = [1u8; 32];

        let mut fuzzer1 = Fuzzer::new(Some(seed));
        let mut fuzzer2 = Fuzzer::new(Some(seed));

        for _ in 0..10 {
            assert_eq!(fuzzer1.random_int(0, 1000), fuzzer2.random_int(0, 1000));
        }
    }

    #[test]
    fn test_fuzzer_from_u64_seed_layout() {
        let fuzzer = Fuzzer::from_u64(0x0102);
        assert_eq!(&fuzzer.seed[..2], &[0x02, 0x01]);
        assert_eq!(&fuzzer.seed[8..10], &[0x02, 0x01]);
    }

    #[test]
    fn test_fuzzer_permutation() {
        let mut fuzzer = Fuzzer::from_u64(3);
        let mut values = fuzzer.permutation(-5, 5);
        assert_eq!(values.len(), 11);
        values.sort_unstable();
        assert_eq!(values, (-5..=5).collect::<Vec<_>>());
    }

    #[test]
    fn test_fuzzer_trace_respects_domain() {
        let config = TraceConfig {
            len: 500,
            min: 10,
            max: 20,
            insert_probability: 0.5,
        };
        let trace = Fuzzer::from_u64(11).trace(&config);
        assert_eq!(trace.len(), 500);
        for op in &trace {
            if let Some(v) = op.value() {
                assert!((10..=20).contains(&v));
            }
        }
        assert!(trace.iter().any(|op| matches!(op, Op::Insert(_))));
        assert!(trace.iter().any(|op| matches!(op, Op::Remove(_))));
    }

    #[test]
    fn test_fuzzer_insert_only_trace() {
        let config = TraceConfig {
            insert_probability: 1.0,
            ..TraceConfig::default()
        };
        let trace = Fuzzer::from_u64(5).trace(&config);
        assert!(trace.iter().all(|op| matches!(op, Op::Insert(_))));
    }

    proptest::proptest! {
        #[test]
        fn test_fuzzer_random_int_in_bounds(
            seed in proptest::prelude::any::<u64>(),
            min in -1_000i64..1_000,
            span in 0i64..1_000,
        ) {
            let mut fuzzer = Fuzzer::from_u64(seed);
            let n = fuzzer.random_int(min, min + span);
            proptest::prop_assert!(n >= min && n <= min + span);
        }
    }
}
