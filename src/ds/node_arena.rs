//! Node storage shared by the linked containers.
//!
//! Every linked container in the crate keeps its nodes in a [`NodeArena`] and
//! wires them together with copyable [`NodeId`] handles instead of pointers,
//! so the arena is the single owner of every node and the containers never
//! touch raw memory. A removed node's slot is threaded onto a vacancy chain
//! that runs through the vacant slots themselves; the next insert pops the
//! chain head, so surviving nodes never move and their ids stay valid.
//!
//! The surface is deliberately the handful of operations the containers need.
//! There is no traversal here: walking an arena in slot order would interleave
//! nodes of unrelated positions, and each container already iterates by
//! following its own links.

/// Stable handle to a node in a [`NodeArena`].
///
/// Ids are plain indices: copy them freely, store them in nodes as links.
/// An id is only meaningful against the arena that issued it, and only until
/// that slot is removed and reissued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    /// Link to the next vacant slot, `None` at the end of the chain.
    Vacant(Option<usize>),
}

/// Slot storage with stable ids and O(1) insert/remove.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value` and returns its id, reusing the most recently vacated
    /// slot when one exists.
    pub fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free_head {
            Some(idx) => {
                match std::mem::replace(&mut self.slots[idx], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.free_head = next,
                    Slot::Occupied(_) => unreachable!("vacancy chain reached an occupied slot"),
                }
                NodeId(idx)
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the value out of `id`'s slot and pushes the slot onto the
    /// vacancy chain. Returns `None` if the slot is already vacant.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        match std::mem::replace(slot, Slot::Vacant(self.free_head)) {
            Slot::Occupied(value) => {
                self.free_head = Some(id.0);
                self.len -= 1;
                Some(value)
            }
            vacant => {
                // Double remove: put the chain link back untouched.
                *slot = vacant;
                None
            }
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node and forgets the vacancy chain. The slot allocation
    /// is kept for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
