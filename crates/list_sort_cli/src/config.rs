use anyhow::{Result, ensure};
use bench::KeyDistribution;
use clap::{Parser, ValueEnum};
use list_sort::{ListArena, ListSortAlgorithm};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Algorithm {
    ChainWorklist,
    LevelSlots,
}

impl From<Algorithm> for ListSortAlgorithm {
    fn from(algo: Algorithm) -> Self {
        match algo {
            Algorithm::ChainWorklist => Self::ChainWorklist,
            Algorithm::LevelSlots => Self::LevelSlots,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Distribution {
    Shuffled,
    Sorted,
    Reversed,
    FewDistinct,
}

impl From<Distribution> for KeyDistribution {
    fn from(dist: Distribution) -> Self {
        match dist {
            Distribution::Shuffled => Self::Shuffled,
            Distribution::Sorted => Self::Sorted,
            Distribution::Reversed => Self::Reversed,
            Distribution::FewDistinct => Self::FewDistinct,
        }
    }
}

/// Sorts a generated linked list with an iterative quicksort and checks
/// the result.
#[derive(Debug, Clone, Parser)]
#[command(name = "list-qsort")]
pub struct Config {
    /// Number of nodes in the input list
    #[arg(long, default_value_t = 100_000)]
    pub count: usize,

    /// Seed for the input generator
    #[arg(long, default_value_t = 0x5EED_2026)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = Algorithm::ChainWorklist)]
    pub algorithm: Algorithm,

    #[arg(long, value_enum, default_value_t = Distribution::Shuffled)]
    pub distribution: Distribution,

    /// Log the input, every split and the output at trace level
    #[arg(long)]
    pub dump: bool,
}

impl Config {
    // Worst case the level slots hold two heads per node on top of the
    // nodes themselves.
    pub const MAX_COUNT: usize = ListArena::<i64>::MAX_SLOTS / 4;

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.count <= Self::MAX_COUNT,
            "--count {} exceeds the supported maximum of {}",
            self.count,
            Self::MAX_COUNT
        );
        Ok(())
    }
}
