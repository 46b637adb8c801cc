//! Ordered key/value skip list.
//!
//! ```text
//! head[2] ───────────────────► 30 ──────────────────► None
//! head[1] ──────► 10 ────────► 30 ───────► 50 ──────► None
//! head[0] ──────► 10 ──► 20 ──► 30 ──► 40 ──► 50 ───► None
//! ```
//!
//! Nodes live in a [`NodeArena`] and link to each other by index, so the only
//! owner of a node is the arena and unlinking never leaves a dangling pointer.
//! The list is a plain single-threaded structure: it takes `&mut self` for
//! every mutation and leaves locking to whoever owns it.

use std::cmp::Ordering;
use std::fmt;

use byte_unit::{Byte, UnitType};
use tinyvec::TinyVec;

use crate::comparator::{Comparator, OrdComparator};
use crate::error::Result;
use crate::level::{GeometricLevel, LevelGenerator};
use crate::measure::{ByteLen, Measure};
use crate::node::{Link, Node, NodeArena, NodeId};
use crate::options::SkipListOptions;

// Predecessor lists up to this height stay on the stack.
const INLINE_LEVELS: usize = 16;

/// Position a search stopped at on one level: the header or a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Prev {
    #[default]
    Head,
    Node(NodeId),
}

type Update = TinyVec<[Prev; INLINE_LEVELS]>;

/// Ordered map from `K` to `V` with a running byte size.
///
/// - `C` orders the keys, [`OrdComparator`] (plain `K: Ord`) by default.
/// - `M` weighs keys and values for [`size`](Self::size), [`ByteLen`] by default.
/// - `G` picks node heights, an entropy-seeded [`GeometricLevel`] by default.
pub struct SkipList<K, V, C = OrdComparator, M = ByteLen, G = GeometricLevel> {
    // header forward links, one per possible level
    pub(crate) head: Box<[Link]>,
    pub(crate) arena: NodeArena<K, V>,
    // levels in use, 1..=head.len()
    pub(crate) level: usize,
    size: usize,
    cmp: C,
    measure: M,
    levels: G,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Empty list ordered by `K: Ord`, with 16 levels and promotion probability 0.5.
    pub fn new() -> Self {
        Self::with_level_generator(OrdComparator, ByteLen, GeometricLevel::default())
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparator<K>> SkipList<K, V, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_level_generator(cmp, ByteLen, GeometricLevel::default())
    }
}

impl<K, V, C: Comparator<K>, M: Measure<K, V>> SkipList<K, V, C, M> {
    pub fn with_options(cmp: C, measure: M, options: SkipListOptions) -> Result<Self> {
        let levels = GeometricLevel::from_options(&options)?;
        Ok(Self::with_level_generator(cmp, measure, levels))
    }
}

impl<K, V, C, M, G: LevelGenerator> SkipList<K, V, C, M, G> {
    pub fn with_level_generator(cmp: C, measure: M, levels: G) -> Self {
        let max_level = levels.max_level().max(1);
        log::debug!("new skip list, max level {}", max_level);

        Self {
            head: vec![None; max_level].into_boxed_slice(),
            arena: NodeArena::new(),
            level: 1,
            size: 0,
            cmp,
            measure,
            levels,
        }
    }
}

impl<K, V, C, M, G> SkipList<K, V, C, M, G> {
    /// Total byte size of the stored keys and values, as weighed by the measure.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels currently in use. An empty list reports 1.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    /// Drops every entry and resets the list to its freshly built state.
    pub fn clear(&mut self) {
        log::debug!("clearing skip list with {} entries", self.len());
        self.arena.clear();
        self.head.fill(None);
        self.level = 1;
        self.size = 0;
    }

    #[inline]
    pub(crate) fn next(&self, prev: Prev, level: usize) -> Link {
        match prev {
            Prev::Head => self.head[level],
            Prev::Node(id) => self.arena[id].next(level),
        }
    }

    #[inline]
    fn set_next(&mut self, prev: Prev, level: usize, link: Link) {
        match prev {
            Prev::Head => self.head[level] = link,
            Prev::Node(id) => self.arena[id].set_next(level, link),
        }
    }
}

impl<K, V, C, M, G> SkipList<K, V, C, M, G>
where
    C: Comparator<K>,
{
    /// Walks from the top active level down to level 0, moving right while the
    /// next key is strictly less than `key`. `visit` sees where the walk stops
    /// on each level; the level 0 stop is returned.
    fn descend(&self, key: &K, mut visit: impl FnMut(usize, Prev)) -> Prev {
        let mut prev = Prev::Head;
        for level in (0..self.level).rev() {
            while let Some(next) = self.next(prev, level) {
                if self.cmp.compare(&self.arena[next].key, key) != Ordering::Less {
                    break;
                }
                prev = Prev::Node(next);
            }
            visit(level, prev);
        }
        prev
    }

    fn predecessors(&self, key: &K) -> Update {
        let mut update = Update::default();
        update.resize(self.level, Prev::Head);
        self.descend(key, |level, prev| update[level] = prev);
        update
    }

    // the node right after a level 0 predecessor, if it holds `key`
    fn matching(&self, prev: Prev, key: &K) -> Option<NodeId> {
        self.next(prev, 0)
            .filter(|&id| self.cmp.compare(&self.arena[id].key, key) == Ordering::Equal)
    }

    fn find(&self, key: &K) -> Option<NodeId> {
        let prev = self.descend(key, |_, _| {});
        self.matching(prev, key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|id| &self.arena[id].value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }
}

impl<K, V, C, M, G> SkipList<K, V, C, M, G>
where
    C: Comparator<K>,
    M: Measure<K, V>,
    G: LevelGenerator,
{
    /// Inserts `value` under `key`.
    ///
    /// An existing key keeps its node and gets the new value; the old one is
    /// returned and the size is adjusted by the difference in value size.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut update = self.predecessors(&key);

        if let Some(id) = self.matching(update[0], &key) {
            let added = self.measure.value_size(&value);
            let old = std::mem::replace(&mut self.arena[id].value, value);
            self.size = self.size + added - self.measure.value_size(&old);
            return Some(old);
        }

        let height = self.levels.random_level().clamp(1, self.max_level());
        if height > self.level {
            log::trace!("skip list level {} -> {}", self.level, height);
            update.resize(height, Prev::Head);
            self.level = height;
        }

        self.size += self.measure.key_size(&key) + self.measure.value_size(&value);

        let id = self.arena.insert(Node::new(key, value, height));
        for (level, &prev) in update.iter().enumerate().take(height) {
            let next = self.next(prev, level);
            self.arena[id].set_next(level, next);
            self.set_next(prev, level, Some(id));
        }

        None
    }

    /// Runs `f` on the value stored for `key` and re-measures it afterwards.
    /// Returns `false` without calling `f` when the key is absent.
    pub fn update(&mut self, key: &K, f: impl FnOnce(&mut V)) -> bool {
        let Some(id) = self.find(key) else {
            return false;
        };

        let value = &mut self.arena[id].value;
        let before = self.measure.value_size(value);
        f(value);
        let after = self.measure.value_size(value);
        self.size = self.size - before + after;
        true
    }

    /// Removes `key` and returns its value. Absent keys are a no-op.
    pub fn erase(&mut self, key: &K) -> Option<V> {
        let update = self.predecessors(key);
        let target = self.matching(update[0], key)?;

        // levels above the node's own height never point at it
        let height = self.arena[target].height();
        for (level, &prev) in update.iter().enumerate().take(height) {
            if self.next(prev, level) == Some(target) {
                let next = self.arena[target].next(level);
                self.set_next(prev, level, next);
            }
        }

        let node = self.arena.remove(target)?;
        self.size -= self.measure.key_size(&node.key) + self.measure.value_size(&node.value);

        let level = self.level;
        while self.level > 1 && self.head[self.level - 1].is_none() {
            self.level -= 1;
        }
        if self.level != level {
            log::trace!("skip list level {} -> {}", level, self.level);
        }

        Some(node.value)
    }
}

impl<K, V, C, M, G> fmt::Debug for SkipList<K, V, C, M, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = Byte::from_u64(self.size as u64).get_appropriate_unit(UnitType::Binary);
        f.debug_struct("SkipList")
            .field("len", &self.len())
            .field("size", &format_args!("{}", size))
            .field("level", &self.level)
            .field("max_level", &self.max_level())
            .finish()
    }
}
