use std::fmt::Debug;

use tracing::trace;

use crate::SortContext;
use crate::list::{ListArena, ListId};

use super::common::{self, SplitHeads};

/// Quicksort driven by the chain worklist.
///
/// Each split pushes `right`, then the pivot, then `left`, so the chain on
/// top of the worklist always holds the smallest pending keys and a
/// resolved singleton can go straight to the tail of the result.
pub fn sort<K: Ord + Debug>(
    arena: &mut ListArena<K>,
    list: ListId,
    ctx: &mut SortContext,
) -> ListId {
    let worklist = &mut ctx.worklist;
    let stats = &mut ctx.stats;

    let result = arena.new_list();
    let heads = SplitHeads::new(arena);
    worklist.adopt(list);

    while let Some(chain) = worklist.pop_any() {
        let target = chain.list();
        if arena.is_empty(target) {
            stats.discarded += 1;
        } else if arena.is_singular(target) {
            arena.splice_back(target, &result);
            stats.merged += 1;
        } else {
            common::partition_three_way(arena, target, &heads);
            stats.splits += 1;
            trace!(
                left = %arena.dump(&heads.left),
                pivot = %arena.dump(&heads.pivot),
                right = %arena.dump(&heads.right),
                pending = worklist.len(),
                "split partition"
            );
            worklist.push(arena, &heads.right);
            worklist.push(arena, &heads.pivot);
            worklist.push(arena, &heads.left);
        }
        worklist.retire(arena, chain);
    }

    heads.release(arena);
    stats.peak_pending = worklist.peak_pending();
    stats.chains_created = worklist.chains_created();
    stats.chains_retired = worklist.chains_retired();
    result
}
