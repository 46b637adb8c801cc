use std::ops::{Index, IndexMut};

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// Forward link at one level; `None` marks the end of that level.
pub(crate) type Link = Option<NodeId>;

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    // one link per level the node occupies, level 0 first
    tower: Box<[Link]>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, height: usize) -> Self {
        debug_assert!(height >= 1);
        Self {
            key,
            value,
            tower: vec![None; height].into_boxed_slice(),
        }
    }

    pub(crate) fn height(&self) -> usize {
        self.tower.len()
    }

    #[inline]
    pub(crate) fn next(&self, level: usize) -> Link {
        self.tower[level]
    }

    #[inline]
    pub(crate) fn set_next(&mut self, level: usize, link: Link) {
        self.tower[level] = link;
    }
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant,
}

/// Owns every node of a skip list.
///
/// Nodes live in a growable slot table and refer to each other by [`NodeId`].
/// Slots freed by [`NodeArena::remove`] are reused by later inserts. Dropping
/// the arena drops each node exactly once, in slot order.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<NodeId>,
    len: usize,
}

impl<K, V> Default for NodeArena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> NodeArena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, node: Node<K, V>) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot. Returns `None` if the slot is already vacant.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<Node<K, V>> {
        let slot = self.slots.get_mut(id.0)?;
        match std::mem::replace(slot, Slot::Vacant) {
            Slot::Occupied(node) => {
                self.len -= 1;
                self.free.push(id);
                Some(node)
            }
            Slot::Vacant => None,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

// Links handed out by the arena are only ever dropped together with the node
// they point at, so a dangling id here is a broken skip list.
impl<K, V> Index<NodeId> for NodeArena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id.0),
        }
    }
}

impl<K, V> IndexMut<NodeId> for NodeArena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id.0),
        }
    }
}
