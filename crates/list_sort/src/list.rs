use std::fmt;

/// Node handle inside a [`ListArena`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owned handle of a circular, sentinel-headed list inside a [`ListArena`].
///
/// The handle is move-only: whoever holds it owns the list, and passing it
/// by value hands the list (and every node on it) over.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct ListId(u32);

struct Slot<K> {
    // `None` marks a list head.
    key: Option<K>,
    prev: u32,
    next: u32,
}

/// Arena of doubly-linked nodes and list heads.
///
/// Every list is circular with a sentinel head, so insertion, removal and
/// splicing never branch on an end-of-list case. Links are slot indices;
/// an unlinked node points at itself.
pub struct ListArena<K> {
    slots: Vec<Slot<K>>,
    vacant_heads: Vec<u32>,
    nodes: usize,
}

impl<K> Default for ListArena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ListArena<K> {
    /// Upper bound on nodes plus list heads held by one arena.
    pub const MAX_SLOTS: usize = u32::MAX as usize;

    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant_heads: Vec::new(),
            nodes: 0,
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            slots: Vec::with_capacity(nodes),
            vacant_heads: Vec::new(),
            nodes: 0,
        }
    }

    /// Number of nodes ever allocated in this arena.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn alloc_slot(&mut self, key: Option<K>) -> u32 {
        assert!(
            self.slots.len() < Self::MAX_SLOTS,
            "list arena exhausted its {} slots",
            Self::MAX_SLOTS
        );
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
            key,
            prev: idx,
            next: idx,
        });
        idx
    }

    pub fn new_list(&mut self) -> ListId {
        if let Some(idx) = self.vacant_heads.pop() {
            debug_assert!(self.is_detached(idx));
            return ListId(idx);
        }
        ListId(self.alloc_slot(None))
    }

    /// Returns an empty list head to the arena for reuse.
    ///
    /// Panics if the list still owns nodes: dropping them here would lose
    /// them for good.
    pub fn release_list(&mut self, list: ListId) {
        assert!(
            self.is_empty(&list),
            "released a list head that still owns {} node(s)",
            self.len(&list)
        );
        self.vacant_heads.push(list.0);
    }

    /// Allocates a node that belongs to no list yet.
    pub fn alloc_node(&mut self, key: K) -> NodeId {
        let idx = self.alloc_slot(Some(key));
        self.nodes += 1;
        NodeId(idx)
    }

    pub fn push_back_key(&mut self, list: &ListId, key: K) -> NodeId {
        let node = self.alloc_node(key);
        self.push_back(node, list);
        node
    }

    pub fn from_keys<I: IntoIterator<Item = K>>(&mut self, keys: I) -> ListId {
        let list = self.new_list();
        for key in keys {
            self.push_back_key(&list, key);
        }
        list
    }

    #[inline]
    pub fn key(&self, node: NodeId) -> &K {
        match &self.slots[node.index()].key {
            Some(key) => key,
            None => unreachable!("node {} is a list head", node.0),
        }
    }

    #[inline]
    fn is_detached(&self, idx: u32) -> bool {
        let slot = &self.slots[idx as usize];
        slot.next == idx && slot.prev == idx
    }

    #[inline]
    pub fn is_empty(&self, list: &ListId) -> bool {
        self.slots[list.0 as usize].next == list.0
    }

    /// True when the list holds exactly one node.
    #[inline]
    pub fn is_singular(&self, list: &ListId) -> bool {
        let head = &self.slots[list.0 as usize];
        head.next != list.0 && head.next == head.prev
    }

    #[inline]
    pub fn first(&self, list: &ListId) -> Option<NodeId> {
        let next = self.slots[list.0 as usize].next;
        (next != list.0).then_some(NodeId(next))
    }

    #[inline]
    pub fn last(&self, list: &ListId) -> Option<NodeId> {
        let prev = self.slots[list.0 as usize].prev;
        (prev != list.0).then_some(NodeId(prev))
    }

    /// Successor of `node` within `list`.
    ///
    /// Read the successor before unlinking `node` to walk a list while
    /// removing from it.
    #[inline]
    pub fn next_in(&self, list: &ListId, node: NodeId) -> Option<NodeId> {
        let next = self.slots[node.index()].next;
        (next != list.0).then_some(NodeId(next))
    }

    #[inline]
    fn insert_between(&mut self, new: u32, prev: u32, next: u32) {
        self.slots[next as usize].prev = new;
        let slot = &mut self.slots[new as usize];
        slot.next = next;
        slot.prev = prev;
        self.slots[prev as usize].next = new;
    }

    pub fn push_front(&mut self, node: NodeId, list: &ListId) {
        debug_assert!(self.is_detached(node.0), "node {} is still linked", node.0);
        let next = self.slots[list.0 as usize].next;
        self.insert_between(node.0, list.0, next);
    }

    pub fn push_back(&mut self, node: NodeId, list: &ListId) {
        debug_assert!(self.is_detached(node.0), "node {} is still linked", node.0);
        let prev = self.slots[list.0 as usize].prev;
        self.insert_between(node.0, prev, list.0);
    }

    /// Removes `node` from whichever list holds it.
    pub fn unlink(&mut self, node: NodeId) {
        let Slot { prev, next, .. } = self.slots[node.index()];
        self.slots[prev as usize].next = next;
        self.slots[next as usize].prev = prev;
        let slot = &mut self.slots[node.index()];
        slot.prev = node.0;
        slot.next = node.0;
    }

    fn splice_between(&mut self, from: u32, prev: u32, next: u32) {
        let first = self.slots[from as usize].next;
        let last = self.slots[from as usize].prev;

        self.slots[first as usize].prev = prev;
        self.slots[prev as usize].next = first;
        self.slots[last as usize].next = next;
        self.slots[next as usize].prev = last;

        let head = &mut self.slots[from as usize];
        head.next = from;
        head.prev = from;
    }

    /// Moves every node of `from` to the front of `to`, keeping their order
    /// and leaving `from` empty.
    pub fn splice_front(&mut self, from: &ListId, to: &ListId) {
        debug_assert_ne!(from, to);
        if self.is_empty(from) {
            return;
        }
        let next = self.slots[to.0 as usize].next;
        self.splice_between(from.0, to.0, next);
    }

    /// Moves every node of `from` to the back of `to`, keeping their order
    /// and leaving `from` empty.
    pub fn splice_back(&mut self, from: &ListId, to: &ListId) {
        debug_assert_ne!(from, to);
        if self.is_empty(from) {
            return;
        }
        let prev = self.slots[to.0 as usize].prev;
        self.splice_between(from.0, prev, to.0);
    }

    pub fn len(&self, list: &ListId) -> usize {
        self.iter(list).count()
    }

    pub fn iter<'a>(&'a self, list: &ListId) -> Iter<'a, K> {
        Iter {
            arena: self,
            head: list.0,
            cur: self.slots[list.0 as usize].next,
        }
    }

    pub fn node_ids(&self, list: &ListId) -> Vec<NodeId> {
        self.iter(list).map(|(node, _)| node).collect()
    }

    pub fn keys(&self, list: &ListId) -> Vec<K>
    where
        K: Clone,
    {
        self.iter(list).map(|(_, key)| key.clone()).collect()
    }

    pub fn is_ordered(&self, list: &ListId) -> bool
    where
        K: Ord,
    {
        let mut iter = self.iter(list);
        let Some((_, mut prev)) = iter.next() else {
            return true;
        };
        for (_, key) in iter {
            if key < prev {
                return false;
            }
            prev = key;
        }
        true
    }

    /// Space-separated rendering of the keys on `list`.
    pub fn dump<'a>(&'a self, list: &ListId) -> ListDump<'a, K> {
        ListDump {
            arena: self,
            head: list.0,
        }
    }
}

pub struct Iter<'a, K> {
    arena: &'a ListArena<K>,
    head: u32,
    cur: u32,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (NodeId, &'a K);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == self.head {
            return None;
        }
        let node = NodeId(self.cur);
        self.cur = self.arena.slots[self.cur as usize].next;
        Some((node, self.arena.key(node)))
    }
}

pub struct ListDump<'a, K> {
    arena: &'a ListArena<K>,
    head: u32,
}

impl<K: fmt::Debug> fmt::Display for ListDump<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iter = Iter {
            arena: self.arena,
            head: self.head,
            cur: self.arena.slots[self.head as usize].next,
        };
        for (i, (_, key)) in iter.enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key:?}")?;
        }
        Ok(())
    }
}
