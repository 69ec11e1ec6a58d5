use crate::list::{ListArena, ListId};

/// One pending partition: a list head that owns the partition's nodes.
///
/// Hand a drained chain back through [`Worklist::retire`].
#[derive(Debug)]
#[must_use]
pub(crate) struct Chain {
    list: ListId,
}

impl Chain {
    pub(crate) fn list(&self) -> &ListId {
        &self.list
    }
}

/// Pool of pending partitions standing in for the recursion stack.
///
/// `pop_any` hands back the most recently pushed chain. Callers that push
/// the parts of a split from the largest key range to the smallest keep the
/// pool ordered by key range from top to bottom.
#[derive(Debug, Default)]
pub(crate) struct Worklist {
    pending: Vec<Chain>,
    created: usize,
    retired: usize,
    peak: usize,
}

impl Worklist {
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Moves every node of `sublist` into a fresh chain, leaving `sublist`
    /// empty.
    pub(crate) fn push<K>(&mut self, arena: &mut ListArena<K>, sublist: &ListId) {
        let list = arena.new_list();
        arena.splice_back(sublist, &list);
        self.adopt(list);
    }

    /// Adds a chain that takes over `list` directly.
    pub(crate) fn adopt(&mut self, list: ListId) {
        self.pending.push(Chain { list });
        self.created += 1;
        self.peak = self.peak.max(self.pending.len());
    }

    #[inline]
    #[must_use]
    pub(crate) fn pop_any(&mut self) -> Option<Chain> {
        self.pending.pop()
    }

    /// Destroys a drained chain and recycles its list head.
    ///
    /// Panics if the chain still owns nodes.
    pub(crate) fn retire<K>(&mut self, arena: &mut ListArena<K>, chain: Chain) {
        assert!(
            arena.is_empty(&chain.list),
            "partition chain retired while owning {} node(s)",
            arena.len(&chain.list)
        );
        arena.release_list(chain.list);
        self.retired += 1;
    }

    pub(crate) fn chains_created(&self) -> usize {
        self.created
    }

    pub(crate) fn chains_retired(&self) -> usize {
        self.retired
    }

    /// Largest number of chains pending at once since the last reset.
    pub(crate) fn peak_pending(&self) -> usize {
        self.peak
    }

    pub(crate) fn reset_counters(&mut self) {
        debug_assert!(self.is_empty());
        self.created = 0;
        self.retired = 0;
        self.peak = 0;
    }
}

impl Drop for Worklist {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            debug_assert!(
                self.pending.is_empty(),
                "worklist dropped with {} pending chain(s)",
                self.pending.len()
            );
        }
    }
}
