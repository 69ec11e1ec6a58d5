use crate::list::{ListArena, ListId};

/// Scratch heads for one three-way split, reused across every split of a
/// single sort.
pub struct SplitHeads {
    pub left: ListId,
    pub pivot: ListId,
    pub right: ListId,
}

impl SplitHeads {
    pub fn new<K>(arena: &mut ListArena<K>) -> Self {
        Self {
            left: arena.new_list(),
            pivot: arena.new_list(),
            right: arena.new_list(),
        }
    }

    pub fn release<K>(self, arena: &mut ListArena<K>) {
        arena.release_list(self.left);
        arena.release_list(self.pivot);
        arena.release_list(self.right);
    }
}

/// Splits `target` around its first node.
///
/// The first node moves to `heads.pivot`; every other node moves, in its
/// original relative order, to `heads.left` when its key is `<=` the pivot
/// key and to `heads.right` otherwise. `target` is left empty.
pub fn partition_three_way<K: Ord>(
    arena: &mut ListArena<K>,
    target: &ListId,
    heads: &SplitHeads,
) {
    debug_assert!(arena.is_empty(&heads.left));
    debug_assert!(arena.is_empty(&heads.pivot));
    debug_assert!(arena.is_empty(&heads.right));

    let Some(pivot) = arena.first(target) else {
        return;
    };
    arena.unlink(pivot);
    arena.push_back(pivot, &heads.pivot);

    let mut cursor = arena.first(target);
    while let Some(node) = cursor {
        cursor = arena.next_in(target, node);
        arena.unlink(node);
        let dest = if arena.key(node) > arena.key(pivot) {
            &heads.right
        } else {
            &heads.left
        };
        arena.push_back(node, dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_first_node() {
        let mut arena = ListArena::new();
        let target = arena.from_keys([5_i64, 3, 8, 5, 1, 9]);
        let heads = SplitHeads::new(&mut arena);

        partition_three_way(&mut arena, &target, &heads);

        assert!(arena.is_empty(&target));
        assert_eq!(arena.keys(&heads.pivot), vec![5]);
        assert_eq!(arena.keys(&heads.left), vec![3, 5, 1]);
        assert_eq!(arena.keys(&heads.right), vec![8, 9]);
    }

    #[test]
    fn pivot_is_the_first_node_by_identity() {
        let mut arena = ListArena::new();
        let target = arena.from_keys([2_i64, 2, 2]);
        let ids = arena.node_ids(&target);
        let heads = SplitHeads::new(&mut arena);

        partition_three_way(&mut arena, &target, &heads);

        assert_eq!(arena.node_ids(&heads.pivot), vec![ids[0]]);
        assert_eq!(arena.node_ids(&heads.left), vec![ids[1], ids[2]]);
        assert!(arena.is_empty(&heads.right));
    }

    #[test]
    fn empty_target_is_left_alone() {
        let mut arena: ListArena<i64> = ListArena::new();
        let target = arena.new_list();
        let heads = SplitHeads::new(&mut arena);

        partition_three_way(&mut arena, &target, &heads);

        assert!(arena.is_empty(&heads.pivot));
        assert!(arena.is_empty(&heads.left));
        assert!(arena.is_empty(&heads.right));
    }
}
