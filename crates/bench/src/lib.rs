use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_DISTINCT_VALUES: i64 = 16;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Shape of a generated key sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyDistribution {
    /// A random permutation of `0..n`.
    Shuffled,
    Sorted,
    Reversed,
    /// Uniform draws from a handful of values.
    FewDistinct,
}

pub const ALL_DISTRIBUTIONS: [KeyDistribution; 4] = [
    KeyDistribution::Shuffled,
    KeyDistribution::Sorted,
    KeyDistribution::Reversed,
    KeyDistribution::FewDistinct,
];

impl KeyDistribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::Shuffled => "shuffled",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::FewDistinct => "few_distinct",
        }
    }
}

pub fn generate_keys<R: Rng + ?Sized>(dist: KeyDistribution, n: usize, rng: &mut R) -> Vec<i64> {
    match dist {
        KeyDistribution::Shuffled => {
            let mut keys = (0..n as i64).collect::<Vec<_>>();
            keys.shuffle(rng);
            keys
        }
        KeyDistribution::Sorted => (0..n as i64).collect(),
        KeyDistribution::Reversed => (0..n as i64).rev().collect(),
        KeyDistribution::FewDistinct => (0..n)
            .map(|_| rng.random_range(0..FEW_DISTINCT_VALUES))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = default_rng();
        let mut keys = generate_keys(KeyDistribution::Shuffled, 1000, &mut rng);
        assert_ne!(keys, (0..1000).collect::<Vec<_>>());
        keys.sort_unstable();
        assert_eq!(keys, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn shapes() {
        let mut rng = default_rng();
        assert_eq!(generate_keys(KeyDistribution::Sorted, 4, &mut rng), vec![0, 1, 2, 3]);
        assert_eq!(generate_keys(KeyDistribution::Reversed, 4, &mut rng), vec![3, 2, 1, 0]);
        assert!(generate_keys(KeyDistribution::Shuffled, 0, &mut rng).is_empty());

        let few = generate_keys(KeyDistribution::FewDistinct, 512, &mut rng);
        assert_eq!(few.len(), 512);
        assert!(few.iter().all(|&k| (0..FEW_DISTINCT_VALUES).contains(&k)));
    }

    #[test]
    fn labels_are_unique() {
        let mut labels = ALL_DISTRIBUTIONS.map(KeyDistribution::label).to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ALL_DISTRIBUTIONS.len());
    }
}
