//! Double-ended queue over doubly linked arena nodes.
//!
//! Every node carries `prev` and `next` ids into a [`NodeArena`], so both
//! ends support O(1) insertion and removal. All four mutating operations
//! patch at most two neighbor links.
//!
//! ## Architecture
//!
//! ```text
//!   arena (NodeArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────────────────────┐
//!   │ NodeId │ Node { value, prev, next }                       │
//!   ├────────┼──────────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None,      next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: Some(id_3) } │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }       │
//!   └────────┴──────────────────────────────────────────────────┘
//!
//!              ┌───── next ─────►  ┌───── next ─────►
//!   head ─►  [id_1]              [id_2]              [id_3]  ◄─ tail
//!              ◄───── prev ─────┘  ◄───── prev ─────┘
//! ```
//!
//! ## Operations
//! - `push_front` / `push_back`: O(1), never refused
//! - `pop_front` / `pop_back`: O(1), empty reported before any mutation
//! - `front` / `back`: O(1) peeks
//! - `iter`: front-to-back, walkable from both ends via `DoubleEndedIterator`
//!
//! `debug_validate_invariants()` walks the chain in both directions in
//! debug/test builds.

use std::fmt;

use crate::ds::node_arena::{NodeArena, NodeId};
use crate::error::EmptyError;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Unbounded double-ended queue with O(1) operations at both ends.
///
/// # Example
///
/// ```
/// use containerkit::ds::Deque;
///
/// let mut deque = Deque::new();
/// deque.push_back(10);
/// deque.push_front(20);
/// deque.push_back(30);
/// deque.push_front(40);
///
/// assert_eq!(deque.to_vec(), vec![40, 20, 10, 30]);
/// assert_eq!(deque.pop_front(), Ok(40));
/// assert_eq!(deque.pop_back(), Ok(30));
/// ```
#[derive(Clone, Default)]
pub struct Deque<T> {
    arena: NodeArena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty deque with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Inserts a value at the front. O(1), never fails.
    pub fn push_front(&mut self, value: T) {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => {
                if let Some(node) = self.arena.get_mut(old_head) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Inserts a value at the back. O(1), never fails.
    pub fn push_back(&mut self, value: T) {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => {
                if let Some(node) = self.arena.get_mut(old_tail) {
                    node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        let id = self.head.ok_or(EmptyError)?;
        let next = self.arena.get(id).and_then(|node| node.next);

        match next {
            Some(next_id) => {
                if let Some(node) = self.arena.get_mut(next_id) {
                    node.prev = None;
                }
            },
            None => self.tail = None,
        }
        self.head = next;

        self.arena.remove(id).map(|node| node.value).ok_or(EmptyError)
    }

    /// Removes and returns the back value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T, EmptyError> {
        let id = self.tail.ok_or(EmptyError)?;
        let prev = self.arena.get(id).and_then(|node| node.prev);

        match prev {
            Some(prev_id) => {
                if let Some(node) = self.arena.get_mut(prev_id) {
                    node.next = None;
                }
            },
            None => self.head = None,
        }
        self.tail = prev;

        self.arena.remove(id).map(|node| node.value).ok_or(EmptyError)
    }

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn front(&self) -> Result<&T, EmptyError> {
        self.head
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
            .ok_or(EmptyError)
    }

    /// Returns the back value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the deque is empty.
    pub fn back(&self) -> Result<&T, EmptyError> {
        self.tail
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
            .ok_or(EmptyError)
    }

    /// Removes all elements and frees the nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator from front to back.
    ///
    /// The iterator also walks from the back via [`DoubleEndedIterator`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() {
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        // Forward walk: next-links cover every node, back-links mirror them.
        let mut count = 0usize;
        let mut prev = None;
        let mut current = self.head;
        let mut last = None;

        while let Some(id) = current {
            let node = self.arena.get(id).expect("node missing from arena");
            assert_eq!(node.prev, prev, "prev link does not mirror next link");
            prev = Some(id);
            last = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
        assert_eq!(last, self.tail);
        assert_eq!(self.arena.len(), self.len());
    }
}

impl<T: Clone> Deque<T> {
    /// Materializes the contents front-to-back into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Iterator over deque values, front-to-back by default.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = self.deque.arena.get(id)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = self.deque.arena.get(id)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
