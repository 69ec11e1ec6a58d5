use std::fmt::Debug;

use tracing::trace;

use crate::SortContext;
use crate::list::{ListArena, ListId};

use super::common::{self, SplitHeads};

/// Quicksort over an ordered row of level slots.
///
/// Slot `i` is the partition being looked at. A split leaves `left` in slot
/// `i`, the pivot in `i + 1` and `right` in `i + 2`, then moves to `i + 2`;
/// slots above the cursor are always empty. Partitions are therefore
/// resolved from the largest keys down, and each singleton is spliced onto
/// the front of the result.
pub fn sort<K: Ord + Debug>(
    arena: &mut ListArena<K>,
    list: ListId,
    ctx: &mut SortContext,
) -> ListId {
    let stats = &mut ctx.stats;

    let result = arena.new_list();
    let heads = SplitHeads::new(arena);
    let mut slots = vec![list];
    // Number of live slots; the cursor is `depth - 1`.
    let mut depth = 1_usize;
    stats.peak_pending = depth;

    while depth > 0 {
        let i = depth - 1;
        if arena.is_empty(&slots[i]) {
            stats.discarded += 1;
            depth -= 1;
        } else if arena.is_singular(&slots[i]) {
            arena.splice_front(&slots[i], &result);
            stats.merged += 1;
            depth -= 1;
        } else {
            while slots.len() < i + 3 {
                slots.push(arena.new_list());
            }
            debug_assert!(slots[i + 1..].iter().all(|slot| arena.is_empty(slot)));

            common::partition_three_way(arena, &slots[i], &heads);
            stats.splits += 1;
            trace!(
                level = i,
                left = %arena.dump(&heads.left),
                pivot = %arena.dump(&heads.pivot),
                right = %arena.dump(&heads.right),
                "split partition"
            );
            arena.splice_back(&heads.left, &slots[i]);
            arena.splice_back(&heads.pivot, &slots[i + 1]);
            arena.splice_back(&heads.right, &slots[i + 2]);
            depth += 2;
            stats.peak_pending = stats.peak_pending.max(depth);
        }
    }

    heads.release(arena);
    stats.chains_created = slots.len();
    for slot in slots {
        arena.release_list(slot);
        stats.chains_retired += 1;
    }
    result
}
