//! LRU Tracker Module
//!
//! Recency ordering for cache eviction, kept as a doubly-linked list whose
//! nodes live in an arena and are addressed by index.

use std::mem;

/// Index of a node inside the tracker's arena.
pub(crate) type NodeId = usize;

#[derive(Debug)]
struct Node {
    key: String,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    /// False once the node is on the free list.
    linked: bool,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// - Front = least recently used (next eviction candidate)
/// - Back = most recently used
///
/// Every operation is O(1). Callers keep the [`NodeId`] returned by
/// [`push_back`](Self::push_back) next to their own entry and hand it back
/// to `touch`/`remove`. Freed slots are recycled through a free list; a
/// freed or unknown id is ignored by `touch` and `remove`.
#[derive(Debug, Default)]
pub(crate) struct LruTracker {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a tracker with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Push Back ==
    /// Appends a key at the most-recently-used end and returns its node.
    ///
    /// The caller must not push a key that is already tracked.
    pub fn push_back(&mut self, key: String) -> NodeId {
        let id = match self.free.pop() {
            Some(id) => {
                let node = &mut self.nodes[id];
                node.key = key;
                node.linked = true;
                id
            }
            None => {
                self.nodes.push(Node {
                    key,
                    prev: None,
                    next: None,
                    linked: true,
                });
                self.nodes.len() - 1
            }
        };

        self.link_back(id);
        self.len += 1;
        id
    }

    // == Touch ==
    /// Marks a node as most recently used.
    pub fn touch(&mut self, id: NodeId) {
        if !self.is_linked(id) || self.tail == Some(id) {
            return;
        }
        self.unlink(id);
        self.link_back(id);
    }

    // == Remove ==
    /// Unlinks a node and returns the key it held.
    ///
    /// Returns None if the node was already freed.
    pub fn remove(&mut self, id: NodeId) -> Option<String> {
        if !self.is_linked(id) {
            return None;
        }
        self.unlink(id);
        self.nodes[id].linked = false;
        self.free.push(id);
        self.len -= 1;
        Some(mem::take(&mut self.nodes[id].key))
    }

    // == Pop Front ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn pop_front(&mut self) -> Option<String> {
        let id = self.head?;
        self.remove(id)
    }

    // == Clear ==
    /// Drops every tracked key.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Iter ==
    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tracker: self,
            cursor: self.head,
        }
    }

    fn is_linked(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.linked)
    }

    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = (self.nodes[id].prev, self.nodes[id].next);

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[id].prev = None;
        self.nodes[id].next = None;
    }

    fn link_back(&mut self, id: NodeId) {
        self.nodes[id].prev = self.tail;
        self.nodes[id].next = None;

        match self.tail {
            Some(t) => self.nodes[t].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }
}

/// Iterator over tracked keys, least recently used first.
pub(crate) struct Iter<'a> {
    tracker: &'a LruTracker,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = &self.tracker.nodes[id];
        self.cursor = node.next;
        Some(node.key.as_str())
    }
}
