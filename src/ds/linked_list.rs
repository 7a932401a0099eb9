//! Singly linked list backed by `NodeArena`.
//!
//! Stores list nodes in a `NodeArena` and links them by `NodeId`, so every
//! node has exactly one owner (the arena) and the usual pointer-aliasing
//! hazards of hand-rolled lists cannot arise. The public API is positional:
//! node ids never escape this module.
//!
//! ## Architecture
//!
//! ```text
//!   arena (NodeArena<Node<T>>)
//!   ┌────────┬────────────────────────────────────┐
//!   │ NodeId │ Node { value, next }               │
//!   ├────────┼────────────────────────────────────┤
//!   │ id_1   │ { value: A, next: Some(id_2) }     │
//!   │ id_2   │ { value: B, next: Some(id_3) }     │
//!   │ id_3   │ { value: C, next: None }           │
//!   └────────┴────────────────────────────────────┘
//!
//!   head ─► [id_1] ─► [id_2] ─► [id_3] ─► ∅
//! ```
//!
//! ## Operations
//! - `push_front` / `pop_front`: O(1) at the head
//! - `push_back` / `pop_back` / `insert_at` / `remove_at`: O(n) link walk
//! - `reverse`: O(n) in place, O(1) extra space
//! - `middle`: slow/fast cursor pair, single pass
//! - `has_cycle`: Floyd's cursor-meeting diagnostic
//! - `dedup_sorted`: adjacent-duplicate removal on sorted contents
//!
//! ## Performance
//! - head operations: O(1)
//! - tail/index operations: O(n)
//! - `iter` / `to_vec`: O(n)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::fmt;

use crate::ds::node_arena::{NodeArena, NodeId};
use crate::error::{EmptyError, IndexError};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

/// Singly linked list with arena-owned nodes and positional operations.
///
/// Insertion indices are valid in `0..=len`, removal and access indices in
/// `0..len`. Out-of-range indices are reported as [`IndexError`] before any
/// mutation takes place.
///
/// # Example
///
/// ```
/// use containerkit::ds::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_back(3);
///
/// assert_eq!(list.middle(), Some(&2));
/// list.reverse();
/// assert_eq!(list.to_vec(), vec![3, 2, 1]);
/// ```
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    arena: NodeArena<Node<T>>,
    head: Option<NodeId>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            head: None,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the value at the head of the list.
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        if index >= self.len() {
            return Err(IndexError::new(index, self.len()));
        }
        self.node_at(index)
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
            .ok_or_else(|| IndexError::new(index, self.len()))
    }

    /// Inserts a value at the head. O(1).
    pub fn push_front(&mut self, value: T) {
        let id = self.arena.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
    }

    /// Appends a value after the current last node. O(n).
    pub fn push_back(&mut self, value: T) {
        let last = self.last_id();
        let id = self.arena.insert(Node { value, next: None });
        match last {
            Some(last_id) => {
                if let Some(node) = self.arena.get_mut(last_id) {
                    node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
    }

    /// Inserts a value so that it ends up at position `index`.
    ///
    /// `index == 0` is a head insert, `index == len` an append.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index > len`; the list is unchanged.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        let len = self.len();
        if index > len {
            return Err(IndexError::new(index, len));
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        let Some(prev_id) = self.node_at(index - 1) else {
            return Err(IndexError::new(index, len));
        };
        let next = self.arena.get(prev_id).and_then(|node| node.next);
        let id = self.arena.insert(Node { value, next });
        if let Some(prev) = self.arena.get_mut(prev_id) {
            prev.next = Some(id);
        }
        Ok(())
    }

    /// Removes and returns the head value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        self.unlink_head().ok_or(EmptyError)
    }

    /// Removes and returns the last value. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T, EmptyError> {
        let len = self.len();
        if len == 0 {
            return Err(EmptyError);
        }
        self.remove_at(len - 1).map_err(|_| EmptyError)
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index >= len`; the list is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexError> {
        let len = self.len();
        if index >= len {
            return Err(IndexError::new(index, len));
        }
        if index == 0 {
            return self.unlink_head().ok_or_else(|| IndexError::new(index, len));
        }
        let Some(prev_id) = self.node_at(index - 1) else {
            return Err(IndexError::new(index, len));
        };
        let Some(target) = self.arena.get(prev_id).and_then(|node| node.next) else {
            return Err(IndexError::new(index, len));
        };
        let next = self.arena.get(target).and_then(|node| node.next);
        if let Some(prev) = self.arena.get_mut(prev_id) {
            prev.next = next;
        }
        self.arena
            .remove(target)
            .map(|node| node.value)
            .ok_or_else(|| IndexError::new(index, len))
    }

    /// Reverses the list in place by flipping every next-link. O(n) time,
    /// O(1) extra space.
    pub fn reverse(&mut self) {
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            let next = self.arena.get(id).and_then(|node| node.next);
            if let Some(node) = self.arena.get_mut(id) {
                node.next = prev;
            }
            prev = Some(id);
            current = next;
        }
        self.head = prev;
    }

    /// Returns the middle element via a slow/fast cursor pair.
    ///
    /// The fast cursor advances two nodes per step; when it runs off the end
    /// the slow cursor sits on the middle. For even lengths this is the
    /// second of the two central elements. Returns `None` on an empty list.
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head?;
        let mut fast = self.head;
        while let Some(fast_id) = fast
            && let Some(fast_next) = self.arena.get(fast_id).and_then(|node| node.next)
        {
            fast = self.arena.get(fast_next).and_then(|node| node.next);
            if let Some(next_slow) = self.arena.get(slow).and_then(|node| node.next) {
                slow = next_slow;
            }
        }
        self.arena.get(slow).map(|node| &node.value)
    }

    /// Floyd's cycle detection: returns `true` iff the slow and fast cursors
    /// ever meet.
    ///
    /// The public operations never create a cycle; this diagnostic stays
    /// correct (and terminates) even if one was forced through the links by
    /// other means.
    pub fn has_cycle(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;
        while let Some(fast_id) = fast
            && let Some(fast_next) = self.arena.get(fast_id).and_then(|node| node.next)
        {
            slow = slow
                .and_then(|id| self.arena.get(id))
                .and_then(|node| node.next);
            fast = self.arena.get(fast_next).and_then(|node| node.next);
            if slow.is_some() && slow == fast {
                return true;
            }
        }
        false
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    fn node_at(&self, index: usize) -> Option<NodeId> {
        let mut current = self.head;
        for _ in 0..index {
            current = self.arena.get(current?)?.next;
        }
        current
    }

    fn last_id(&self) -> Option<NodeId> {
        let mut current = self.head?;
        while let Some(next) = self.arena.get(current).and_then(|node| node.next) {
            current = next;
        }
        Some(current)
    }

    fn unlink_head(&mut self) -> Option<T> {
        let id = self.head?;
        self.head = self.arena.get(id).and_then(|node| node.next);
        self.arena.remove(id).map(|node| node.value)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() {
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;

        while let Some(id) = current {
            assert!(seen.insert(id), "node visited twice; chain has a cycle");
            let node = self.arena.get(id).expect("node missing from arena");
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
        assert_eq!(self.arena.len(), self.len());
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Removes the first element equal to `value`, scanning from the head.
    /// Returns whether a removal occurred.
    pub fn remove_value(&mut self, value: &T) -> bool {
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            let (matches, next) = match self.arena.get(id) {
                Some(node) => (node.value == *value, node.next),
                None => return false,
            };
            if matches {
                match prev {
                    Some(prev_id) => {
                        if let Some(node) = self.arena.get_mut(prev_id) {
                            node.next = next;
                        }
                    },
                    None => self.head = next,
                }
                self.arena.remove(id);
                return true;
            }
            prev = Some(id);
            current = next;
        }
        false
    }

    /// Removes adjacent duplicates in one pass.
    ///
    /// Assumes the list is sorted ascending; on unsorted input only adjacent
    /// runs collapse.
    pub fn dedup_sorted(&mut self) {
        let mut current = self.head;
        while let Some(id) = current {
            let Some(next_id) = self.arena.get(id).and_then(|node| node.next) else {
                break;
            };
            let duplicate = match (self.arena.get(id), self.arena.get(next_id)) {
                (Some(a), Some(b)) => a.value == b.value,
                _ => false,
            };
            if duplicate {
                let after = self.arena.get(next_id).and_then(|node| node.next);
                if let Some(node) = self.arena.get_mut(id) {
                    node.next = after;
                }
                self.arena.remove(next_id);
                // stay on `id` to collapse runs longer than two
            } else {
                current = Some(next_id);
            }
        }
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Materializes the contents into a `Vec` in list order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Iterator over list values from head to tail.
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality compares logical content, not arena layout: two lists holding the
// same sequence are equal even when their slot indices differ.
impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
