//! Self-adjusting (splay) tree cache.
//!
//! An unbounded u64 → u64 store in which every access restructures the tree:
//! the touched node — found, freshly created, or the last node visited by an
//! exhausted search — is rotated to the root. Hot keys therefore sit near
//! the top, which is the entire memoization value of the structure: the
//! access pattern itself keeps amortized lookup cost low, with no capacity
//! bound and no eviction.
//!
//! ## Architecture
//!
//! Nodes live in a [`SlotArena`] and reference each other by `SlotId`:
//!
//! ```text
//!   arena (SlotArena<Node>)                       root
//!   ┌────────┬─────────────────────────────┐       │
//!   │ SlotId │ key  parent  left   right   │       ▼
//!   ├────────┼─────────────────────────────┤      (5)  id_0
//!   │ id_0   │  5   None    id_1   id_2    │     /   \
//!   │ id_1   │  3   id_0    None   None    │   (3)   (8)
//!   │ id_2   │  8   id_0    None   None    │  id_1   id_2
//!   └────────┴─────────────────────────────┘
//! ```
//!
//! Parent links are back-references for the splay walk only; ownership runs
//! strictly downward through the child slots.
//!
//! ## Splay cases
//!
//! ```text
//!   zig (x's parent is the root):        one rotation at p
//!   zig-zig (x, p on the same side):     rotate g, then rotate p
//!   zig-zag (x, p on opposite sides):    rotate p, then rotate g
//! ```
//!
//! A rotation rewires three directions — the demoted node's child slot, the
//! promoted node's parent link, and the ancestor's (or root's) reference —
//! before the next node is examined, so no link ever addresses a freed slot.
//!
//! ## Behavior
//! - `get` on an empty tree returns `None` without adjustment.
//! - `insert` of an existing key overwrites in place and splays; it never
//!   creates a duplicate node.
//! - There is no delete operation; nodes live until the tree is dropped or
//!   cleared.

use std::fmt;

use crate::ds::slot_arena::{SlotArena, SlotId};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::SplayMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::SplayMetricsSnapshot;
use crate::traits::KvCache;

#[derive(Debug)]
struct Node {
    key: u64,
    value: u64,
    parent: Option<SlotId>,
    left: Option<SlotId>,
    right: Option<SlotId>,
}

/// Unbounded splay-tree cache keyed by `u64`.
///
/// # Example
///
/// ```
/// use memokit::cache::splay::SplayCache;
///
/// let mut cache = SplayCache::new();
/// cache.insert(5, 50);
/// cache.insert(3, 30);
/// cache.insert(8, 80);
///
/// assert_eq!(cache.get(3), Some(30));
/// assert_eq!(cache.root_key(), Some(3)); // accessed key is now the root
/// ```
pub struct SplayCache {
    arena: SlotArena<Node>,
    root: Option<SlotId>,
    #[cfg(feature = "metrics")]
    metrics: SplayMetrics,
}

impl SplayCache {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            root: None,
            #[cfg(feature = "metrics")]
            metrics: SplayMetrics::default(),
        }
    }

    /// Creates an empty tree with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            root: None,
            #[cfg(feature = "metrics")]
            metrics: SplayMetrics::default(),
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Key at the root, if any.
    pub fn root_key(&self) -> Option<u64> {
        self.root.map(|id| self.arena[id].key)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Looks up `key`, splaying the deepest node touched.
    ///
    /// On a hit the found node becomes the root and its value is returned.
    /// On a miss the last node visited becomes the root and `None` is
    /// returned; searching an empty tree adjusts nothing.
    pub fn get(&mut self, key: u64) -> Option<u64> {
        let Some(mut cursor) = self.root else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        loop {
            let node = &self.arena[cursor];
            if key == node.key {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_hit();
                self.splay(cursor);
                return Some(self.arena[cursor].value);
            }
            let next = if key < node.key { node.left } else { node.right };
            match next {
                Some(child) => cursor = child,
                None => {
                    #[cfg(feature = "metrics")]
                    self.metrics.record_get_miss();
                    self.splay(cursor);
                    return None;
                },
            }
        }
    }

    /// Inserts or overwrites `key`, splaying the touched node to the root.
    ///
    /// Returns the previous value if the key existed. Inserting into an
    /// empty tree creates the root directly.
    pub fn insert(&mut self, key: u64, value: u64) -> Option<u64> {
        let Some(mut cursor) = self.root else {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_new();
            let id = self.arena.insert(Node {
                key,
                value,
                parent: None,
                left: None,
                right: None,
            });
            self.root = Some(id);
            return None;
        };

        loop {
            let node = &self.arena[cursor];
            if key == node.key {
                #[cfg(feature = "metrics")]
                self.metrics.record_insert_update();
                let previous = std::mem::replace(&mut self.arena[cursor].value, value);
                self.splay(cursor);
                return Some(previous);
            }

            let goes_left = key < node.key;
            let next = if goes_left { node.left } else { node.right };
            match next {
                Some(child) => cursor = child,
                None => {
                    #[cfg(feature = "metrics")]
                    self.metrics.record_insert_new();
                    let id = self.arena.insert(Node {
                        key,
                        value,
                        parent: Some(cursor),
                        left: None,
                        right: None,
                    });
                    if goes_left {
                        self.arena[cursor].left = Some(id);
                    } else {
                        self.arena[cursor].right = Some(id);
                    }
                    self.splay(id);
                    return None;
                },
            }
        }
    }

    /// Rotates `x` to the root via zig / zig-zig / zig-zag steps.
    fn splay(&mut self, x: SlotId) {
        #[cfg(feature = "metrics")]
        self.metrics.record_splay_call();

        while let Some(p) = self.arena[x].parent {
            let x_is_left = self.arena[p].left == Some(x);
            match self.arena[p].parent {
                None => {
                    // zig
                    #[cfg(feature = "metrics")]
                    self.metrics.record_zig();
                    if x_is_left {
                        self.rotate_right(p);
                    } else {
                        self.rotate_left(p);
                    }
                },
                Some(g) => {
                    let p_is_left = self.arena[g].left == Some(p);
                    match (x_is_left, p_is_left) {
                        // zig-zig: grandparent first, then parent
                        (true, true) => {
                            #[cfg(feature = "metrics")]
                            self.metrics.record_zig_zig();
                            self.rotate_right(g);
                            self.rotate_right(p);
                        },
                        (false, false) => {
                            #[cfg(feature = "metrics")]
                            self.metrics.record_zig_zig();
                            self.rotate_left(g);
                            self.rotate_left(p);
                        },
                        // zig-zag: straighten the kink at the parent, then
                        // rotate through the grandparent
                        (true, false) => {
                            #[cfg(feature = "metrics")]
                            self.metrics.record_zig_zag();
                            self.rotate_right(p);
                            self.rotate_left(g);
                        },
                        (false, true) => {
                            #[cfg(feature = "metrics")]
                            self.metrics.record_zig_zag();
                            self.rotate_left(p);
                            self.rotate_right(g);
                        },
                    }
                },
            }
        }
    }

    /// Right rotation about `x`: promotes `x`'s left child into `x`'s slot.
    ///
    /// No-op if `x` has no left child.
    fn rotate_right(&mut self, x: SlotId) {
        let Some(y) = self.arena[x].left else { return };

        let y_right = self.arena[y].right;
        self.arena[x].left = y_right;
        if let Some(b) = y_right {
            self.arena[b].parent = Some(x);
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                if self.arena[p].right == Some(x) {
                    self.arena[p].right = Some(y);
                } else {
                    self.arena[p].left = Some(y);
                }
            },
        }

        self.arena[y].right = Some(x);
        self.arena[x].parent = Some(y);
    }

    /// Left rotation about `x`: promotes `x`'s right child into `x`'s slot.
    ///
    /// No-op if `x` has no right child.
    fn rotate_left(&mut self, x: SlotId) {
        let Some(y) = self.arena[x].right else { return };

        let y_left = self.arena[y].left;
        self.arena[x].right = y_left;
        if let Some(b) = y_left {
            self.arena[b].parent = Some(x);
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                if self.arena[p].left == Some(x) {
                    self.arena[p].left = Some(y);
                } else {
                    self.arena[p].right = Some(y);
                }
            },
        }

        self.arena[y].left = Some(x);
        self.arena[x].parent = Some(y);
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> SplayMetricsSnapshot {
        SplayMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            splay_calls: self.metrics.splay_calls,
            zig_steps: self.metrics.zig_steps,
            zig_zig_steps: self.metrics.zig_zig_steps,
            zig_zag_steps: self.metrics.zig_zag_steps,
            node_count: self.arena.len(),
        }
    }

    /// Keys in symmetric (in-order) traversal order.
    ///
    /// Always sorted ascending while the BST invariant holds; O(len).
    pub fn in_order_keys(&self) -> Vec<u64> {
        let mut keys = Vec::with_capacity(self.arena.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.arena[id].left;
            }
            let Some(id) = stack.pop() else { break };
            keys.push(self.arena[id].key);
            current = self.arena[id].right;
        }
        keys
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.arena.len(), 0);
            return;
        };
        assert!(self.arena[root].parent.is_none(), "root has a parent");

        // Every child's parent link points back; every node is reachable.
        let mut visited = 0usize;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            visited += 1;
            let node = &self.arena[id];
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(
                    self.arena[child].parent,
                    Some(id),
                    "child {} does not point back at parent {}",
                    child.index(),
                    id.index()
                );
                stack.push(child);
            }
        }
        assert_eq!(visited, self.arena.len(), "unreachable nodes in arena");

        // BST order: in-order keys strictly increase.
        let keys = self.in_order_keys();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "in-order keys not strictly increasing");
        }
    }
}

impl Default for SplayCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SplayCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplayCache")
            .field("len", &self.len())
            .field("root_key", &self.root_key())
            .finish_non_exhaustive()
    }
}

impl KvCache<u64, u64> for SplayCache {
    #[inline]
    fn get(&mut self, key: &u64) -> Option<u64> {
        SplayCache::get(self, *key)
    }

    #[inline]
    fn insert(&mut self, key: u64, value: u64) -> Option<u64> {
        SplayCache::insert(self, key, value)
    }

    #[inline]
    fn len(&self) -> usize {
        SplayCache::len(self)
    }
}
