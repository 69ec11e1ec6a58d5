mod algorithms;
pub mod list;
mod worklist;

use std::fmt::Debug;

use tracing::debug;

pub use list::{ListArena, ListId, NodeId};

use worklist::Worklist;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ListSortAlgorithm {
    ChainWorklist,
    LevelSlots,
}

pub const ALL_ALGORITHMS: [ListSortAlgorithm; 2] =
    [ListSortAlgorithm::ChainWorklist, ListSortAlgorithm::LevelSlots];

pub fn all_algorithms() -> &'static [ListSortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: ListSortAlgorithm) -> &'static str {
    match algo {
        ListSortAlgorithm::ChainWorklist => "chain_worklist",
        ListSortAlgorithm::LevelSlots => "level_slots",
    }
}

/// Counters from the most recent sort run with a [`SortContext`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Partitions split around a pivot.
    pub splits: usize,
    /// Singleton partitions moved into the result.
    pub merged: usize,
    /// Empty partitions dropped.
    pub discarded: usize,
    pub peak_pending: usize,
    pub chains_created: usize,
    pub chains_retired: usize,
}

impl SortStats {
    /// Every partition entry created during the run was also destroyed.
    pub fn is_balanced(&self) -> bool {
        self.chains_created == self.chains_retired
    }
}

#[derive(Debug, Default)]
pub struct SortContext {
    pub stats: SortStats,
    worklist: Worklist,
}

impl SortContext {
    /// Partitions still queued; zero whenever no sort is running.
    pub fn pending_partitions(&self) -> usize {
        self.worklist.len()
    }
}

/// Sorts `list` in non-decreasing key order by relinking its nodes.
///
/// The input handle is consumed; the returned handle owns the same nodes.
/// The list must not be aliased by any other handle.
pub fn quick_sort<K: Ord + Debug>(arena: &mut ListArena<K>, list: ListId) -> ListId {
    sort_list(ListSortAlgorithm::ChainWorklist, arena, list)
}

pub fn sort_list<K: Ord + Debug>(
    algo: ListSortAlgorithm,
    arena: &mut ListArena<K>,
    list: ListId,
) -> ListId {
    let mut ctx = SortContext::default();
    sort_list_with_ctx(algo, arena, list, &mut ctx)
}

pub fn sort_list_with_ctx<K: Ord + Debug>(
    algo: ListSortAlgorithm,
    arena: &mut ListArena<K>,
    list: ListId,
    ctx: &mut SortContext,
) -> ListId {
    ctx.stats = SortStats::default();
    ctx.worklist.reset_counters();

    let sorted = match algo {
        ListSortAlgorithm::ChainWorklist => algorithms::chain_quick_sort::sort(arena, list, ctx),
        ListSortAlgorithm::LevelSlots => algorithms::level_quick_sort::sort(arena, list, ctx),
    };

    debug_assert!(ctx.worklist.is_empty());
    debug!(
        algorithm = algorithm_name(algo),
        splits = ctx.stats.splits,
        merged = ctx.stats.merged,
        discarded = ctx.stats.discarded,
        peak_pending = ctx.stats.peak_pending,
        "list sorted"
    );
    sorted
}
