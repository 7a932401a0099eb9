//! Unbounded FIFO queue over arena-backed list nodes.
//!
//! Keeps head and tail cursors into a [`NodeArena`] so both ends are O(1):
//! values enter at the tail and leave from the head.
//!
//! ```text
//!   head ─► [A] ─► [B] ─► [C] ◄─ tail
//!
//!   enqueue ──► new node linked after tail
//!   dequeue ──► head node unlinked and freed
//! ```
//!
//! There is no capacity fence: an enqueue never fails, and through
//! [`CoreQueue`] the backing reports `capacity() == None`.
//! `debug_validate_invariants()` is available in debug/test builds.

use std::fmt;

use crate::ds::node_arena::{NodeArena, NodeId};
use crate::error::{EmptyError, FullError};
use crate::traits::{Container, CoreQueue};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

/// Unbounded FIFO queue with O(1) enqueue and dequeue.
///
/// # Example
///
/// ```
/// use containerkit::ds::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.front(), Ok(&"a"));
/// assert_eq!(queue.rear(), Ok(&"b"));
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Clone, Default)]
pub struct LinkedQueue<T> {
    arena: NodeArena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Adds a value at the rear of the queue. Never fails.
    pub fn enqueue(&mut self, value: T) {
        let id = self.arena.insert(Node { value, next: None });
        match self.tail {
            Some(tail_id) => {
                if let Some(node) = self.arena.get_mut(tail_id) {
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
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        let id = self.head.ok_or(EmptyError)?;
        self.head = self.arena.get(id).and_then(|node| node.next);
        if self.head.is_none() {
            self.tail = None;
        }
        self.arena.remove(id).map(|node| node.value).ok_or(EmptyError)
    }

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn front(&self) -> Result<&T, EmptyError> {
        self.head
            .and_then(|id| self.arena.get(id))
            .map(|node| &node.value)
            .ok_or(EmptyError)
    }

    /// Returns the rear value (most recently enqueued) without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn rear(&self) -> Result<&T, EmptyError> {
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

    /// Returns an iterator from the front of the queue to the rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            current: self.head,
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

        let mut count = 0usize;
        let mut current = self.head;
        let mut last = None;

        while let Some(id) = current {
            let node = self.arena.get(id).expect("node missing from arena");
            last = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
        assert_eq!(last, self.tail);
    }
}

impl<T: Clone> LinkedQueue<T> {
    /// Materializes the contents front-to-rear into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Iterator over queued values from front to rear.
pub struct Iter<'a, T> {
    queue: &'a LinkedQueue<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.queue.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Container for LinkedQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

/// # Example
///
/// ```
/// use containerkit::traits::CoreQueue;
/// use containerkit::ds::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// CoreQueue::enqueue(&mut queue, 1).unwrap();
/// assert_eq!(CoreQueue::capacity(&queue), None);
/// assert!(!CoreQueue::is_full(&queue));
/// ```
impl<T> CoreQueue<T> for LinkedQueue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) -> Result<(), FullError<T>> {
        self.enqueue(value);
        Ok(())
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.dequeue()
    }

    #[inline]
    fn front(&self) -> Result<&T, EmptyError> {
        self.front()
    }

    #[inline]
    fn rear(&self) -> Result<&T, EmptyError> {
        self.rear()
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
