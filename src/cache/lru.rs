//! Recency List Module
//!
//! Arena-backed doubly linked list that keeps resident entries in
//! least-recently-used order.

// == Slot Index ==
/// Position of a node inside the list's arena.
///
/// Indices stay valid until the node is removed; vacated slots are recycled.
pub type SlotIndex = usize;

/// Link value meaning "no neighbour".
const NIL: SlotIndex = usize::MAX;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    /// Neighbour towards the head (more recently used)
    prev: SlotIndex,
    /// Neighbour towards the tail (less recently used)
    next: SlotIndex,
}

// == Recency List ==
/// Tracks access order for LRU eviction.
///
/// Nodes live in a `Vec` and link to each other by index:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Every operation except iteration is O(1). Slots freed by `remove` or
/// `pop_back` are pushed onto a free list and reused by the next insert, so a
/// full cache that keeps evicting never grows the arena.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<SlotIndex>,
    head: SlotIndex,
    tail: SlotIndex,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new entry as the most recently used one.
    ///
    /// Returns the slot holding the entry.
    pub fn push_front(&mut self, key: K, value: V) -> SlotIndex {
        let node = Node {
            key,
            value,
            prev: NIL,
            next: NIL,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks an entry as most recently used.
    ///
    /// # Panics
    /// Panics if `idx` does not refer to a linked node.
    pub fn move_to_front(&mut self, idx: SlotIndex) {
        if idx == self.head {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Remove ==
    /// Unlinks an entry and hands back its key and value.
    ///
    /// # Panics
    /// Panics if `idx` does not refer to a linked node.
    pub fn remove(&mut self, idx: SlotIndex) -> (K, V) {
        self.unlink(idx);
        let node = self.slots[idx]
            .take()
            .expect("slot index must refer to a linked node");
        self.free.push(idx);
        self.len -= 1;
        (node.key, node.value)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        if self.tail == NIL {
            None
        } else {
            Some(self.remove(self.tail))
        }
    }

    /// Least recently used entry, without touching it.
    pub fn back(&self) -> Option<(&K, &V)> {
        self.entry(self.tail)
    }

    /// Most recently used entry, without touching it.
    pub fn front(&self) -> Option<(&K, &V)> {
        self.entry(self.head)
    }

    pub fn key(&self, idx: SlotIndex) -> &K {
        &self.node(idx).key
    }

    pub fn value(&self, idx: SlotIndex) -> &V {
        &self.node(idx).value
    }

    pub fn value_mut(&mut self, idx: SlotIndex) -> &mut V {
        &mut self.node_mut(idx).value
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iter ==
    /// Walks the entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Link Helpers ==
    fn entry(&self, idx: SlotIndex) -> Option<(&K, &V)> {
        if idx == NIL {
            return None;
        }
        let node = self.node(idx);
        Some((&node.key, &node.value))
    }

    fn node(&self, idx: SlotIndex) -> &Node<K, V> {
        self.slots[idx]
            .as_ref()
            .expect("slot index must refer to a linked node")
    }

    fn node_mut(&mut self, idx: SlotIndex) -> &mut Node<K, V> {
        self.slots[idx]
            .as_mut()
            .expect("slot index must refer to a linked node")
    }

    /// Attaches a detached node at the head.
    fn link_front(&mut self, idx: SlotIndex) {
        let old_head = self.head;
        {
            let node = self.node_mut(idx);
            node.prev = NIL;
            node.next = old_head;
        }

        if old_head == NIL {
            self.tail = idx;
        } else {
            self.node_mut(old_head).prev = idx;
        }
        self.head = idx;
    }

    /// Detaches a node, joining its neighbours.
    fn unlink(&mut self, idx: SlotIndex) {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        if prev == NIL {
            self.head = next;
        } else {
            self.node_mut(prev).next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.node_mut(next).prev = prev;
        }

        let node = self.node_mut(idx);
        node.prev = NIL;
        node.next = NIL;
    }
}

// == Iterator ==
/// Borrowing iterator over a [`RecencyList`], most recent first.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: SlotIndex,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = self.list.node(self.cursor);
        self.cursor = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
