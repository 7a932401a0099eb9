//! # Container Trait Hierarchy
//!
//! This module defines the trait hierarchy for the container toolkit, giving the
//! array-backed and linked-node backings of each discipline (LIFO, FIFO) a single
//! shared interface while keeping discipline-inappropriate operations out of reach.
//!
//! ## Architecture
//!
//! ```text
//!                        ┌─────────────────────────────────┐
//!                        │            Container            │
//!                        │                                 │
//!                        │  len(&) → usize                 │
//!                        │  is_empty(&) → bool             │
//!                        │  clear(&mut)                    │
//!                        └───────────────┬─────────────────┘
//!                                        │
//!                     ┌──────────────────┴──────────────────┐
//!                     │                                     │
//!                     ▼                                     ▼
//!   ┌───────────────────────────────────┐  ┌───────────────────────────────────┐
//!   │          CoreStack<T>             │  │          CoreQueue<T>             │
//!   │                                   │  │                                   │
//!   │  push(T) → Result<(), Full>       │  │  enqueue(T) → Result<(), Full>    │
//!   │  pop() → Result<T, Empty>         │  │  dequeue() → Result<T, Empty>     │
//!   │  peek() → Result<&T, Empty>       │  │  front() → Result<&T, Empty>      │
//!   │  capacity() → Option<usize>       │  │  rear() → Result<&T, Empty>       │
//!   │  is_full() → bool                 │  │  capacity() → Option<usize>       │
//!   │                                   │  │  is_full() → bool                 │
//!   └───────────────────────────────────┘  └───────────────────────────────────┘
//!
//!   Implementors:  ArrayStack, LinkedStack        ArrayQueue, LinkedQueue
//! ```
//!
//! ## Trait Design
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        TRAIT HIERARCHY DESIGN                        │
//!   │                                                                      │
//!   │   1. Container: Universal operations ALL containers support          │
//!   │      └── len, is_empty, clear                                        │
//!   │                                                                      │
//!   │   2. CoreStack: LIFO access only                                     │
//!   │      └── push/pop/peek at the top - no positional access             │
//!   │                                                                      │
//!   │   3. CoreQueue: FIFO access only                                     │
//!   │      └── enqueue at the rear, dequeue at the front - no middle       │
//!   │                                                                      │
//!   │   Key Insight: bounded and unbounded backings share one signature.   │
//!   │   push/enqueue always return Result; an unbounded backing simply     │
//!   │   never produces the Err arm, and reports capacity() == None.        │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trait Summary
//!
//! | Trait          | Extends     | Purpose                            |
//! |----------------|-------------|------------------------------------|
//! | `Container`    | -           | Universal size/clear operations    |
//! | `CoreStack<T>` | `Container` | LIFO push/pop/peek                 |
//! | `CoreQueue<T>` | `Container` | FIFO enqueue/dequeue/front/rear    |
//!
//! ## Why `capacity()` Returns `Option<usize>`
//!
//! ```text
//!   ArrayStack (bounded):            LinkedStack (unbounded):
//!
//!     capacity() == Some(n)            capacity() == None
//!     push may return Err(Full)        push always returns Ok
//!     is_full() == len == n            is_full() == false, always
//!
//!   Callers written against CoreStack<T> handle both backings with the
//!   same match on push(); the rejected value rides back in the error.
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use containerkit::traits::{Container, CoreStack, CoreQueue};
//! use containerkit::ds::{ArrayStack, LinkedStack, LinkedQueue};
//!
//! // Function accepting any stack backing
//! fn drain<S: CoreStack<u64>>(stack: &mut S) -> Vec<u64> {
//!     let mut out = Vec::with_capacity(stack.len());
//!     while let Ok(value) = stack.pop() {
//!         out.push(value);
//!     }
//!     out
//! }
//!
//! let mut bounded = ArrayStack::with_capacity(4);
//! let mut linked = LinkedStack::new();
//! for v in [1, 2, 3] {
//!     bounded.push(v).unwrap();
//!     CoreStack::push(&mut linked, v).unwrap();
//! }
//!
//! assert_eq!(drain(&mut bounded), vec![3, 2, 1]);
//! assert_eq!(drain(&mut linked), vec![3, 2, 1]);
//!
//! // Function accepting any queue backing
//! fn replay<Q: CoreQueue<u64>>(queue: &mut Q, items: &[u64]) -> Vec<u64> {
//!     for &item in items {
//!         let _ = queue.enqueue(item);
//!     }
//!     let mut out = Vec::new();
//!     while let Ok(value) = queue.dequeue() {
//!         out.push(value);
//!     }
//!     out
//! }
//!
//! let mut queue = LinkedQueue::new();
//! assert_eq!(replay(&mut queue, &[1, 2, 3]), vec![1, 2, 3]);
//! ```
//!
//! ## Implementation Notes
//!
//! - **Error detection order**: implementations check for empty/full BEFORE
//!   mutating, so a failed operation leaves the container exactly as it was.
//! - **Default Implementations**: `is_empty()` and `is_full()` derive from
//!   `len()` and `capacity()`.
//! - **Object Safety**: all three traits are object-safe; `&mut dyn
//!   CoreStack<T>` works where dynamic dispatch is preferred over the
//!   [`Stack`](crate::builder::Stack) wrapper's enum dispatch.

use crate::error::{EmptyError, FullError};

/// Universal operations every container in the toolkit supports.
///
/// # Example
///
/// ```
/// use containerkit::traits::Container;
/// use containerkit::ds::ArrayStack;
///
/// let mut stack = ArrayStack::with_capacity(8);
/// assert!(stack.is_empty());
///
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert_eq!(Container::len(&stack), 2);
///
/// Container::clear(&mut stack);
/// assert!(stack.is_empty());
/// ```
pub trait Container {
    /// Returns the current number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements. Capacity, if bounded, is unchanged.
    fn clear(&mut self);
}

/// LIFO stack operations over any backing.
///
/// Extends [`Container`] with top-only access. Bounded backings report
/// `capacity() == Some(n)` and refuse pushes at capacity; unbounded backings
/// report `None` and never refuse.
///
/// # Example
///
/// ```
/// use containerkit::traits::CoreStack;
/// use containerkit::ds::ArrayStack;
///
/// let mut stack = ArrayStack::with_capacity(2);
/// stack.push("a").unwrap();
/// stack.push("b").unwrap();
///
/// // Full: the rejected value comes back in the error
/// let err = stack.push("c").unwrap_err();
/// assert_eq!(err.into_inner(), "c");
///
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.peek(), Ok(&"a"));
/// ```
pub trait CoreStack<T>: Container {
    /// Pushes a value on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`FullError`] carrying the rejected value if the backing is
    /// bounded and at capacity. The stack is unchanged.
    fn push(&mut self, value: T) -> Result<(), FullError<T>>;

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    fn pop(&mut self) -> Result<T, EmptyError>;

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    fn peek(&self) -> Result<&T, EmptyError>;

    /// Returns the fixed capacity, or `None` for unbounded backings.
    ///
    /// # Example
    ///
    /// ```
    /// use containerkit::traits::CoreStack;
    /// use containerkit::ds::{ArrayStack, LinkedStack};
    ///
    /// let bounded: ArrayStack<u8> = ArrayStack::with_capacity(16);
    /// assert_eq!(CoreStack::capacity(&bounded), Some(16));
    ///
    /// let linked: LinkedStack<u8> = LinkedStack::new();
    /// assert_eq!(CoreStack::capacity(&linked), None);
    /// ```
    fn capacity(&self) -> Option<usize>;

    /// Returns `true` if a push would be refused.
    ///
    /// Always `false` for unbounded backings.
    fn is_full(&self) -> bool {
        match self.capacity() {
            Some(capacity) => self.len() >= capacity,
            None => false,
        }
    }
}

/// FIFO queue operations over any backing.
///
/// Extends [`Container`] with end-only access: values enter at the rear and
/// leave from the front, so arrival order is preserved exactly.
///
/// # Example
///
/// ```
/// use containerkit::traits::CoreQueue;
/// use containerkit::ds::ArrayQueue;
///
/// let mut queue = ArrayQueue::with_capacity(3);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// queue.enqueue(3).unwrap();
///
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.rear(), Ok(&3));
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// ```
pub trait CoreQueue<T>: Container {
    /// Adds a value at the rear of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`FullError`] carrying the rejected value if the backing is
    /// bounded and at capacity. The queue is unchanged.
    fn enqueue(&mut self, value: T) -> Result<(), FullError<T>>;

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T, EmptyError>;

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    fn front(&self) -> Result<&T, EmptyError>;

    /// Returns the rear value (most recently enqueued) without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    fn rear(&self) -> Result<&T, EmptyError>;

    /// Returns the fixed capacity, or `None` for unbounded backings.
    fn capacity(&self) -> Option<usize>;

    /// Returns `true` if an enqueue would be refused.
    ///
    /// Always `false` for unbounded backings.
    fn is_full(&self) -> bool {
        match self.capacity() {
            Some(capacity) => self.len() >= capacity,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation for exercising trait defaults
    struct MockStack {
        items: Vec<i32>,
        capacity: Option<usize>,
    }

    impl Container for MockStack {
        fn len(&self) -> usize {
            self.items.len()
        }

        fn clear(&mut self) {
            self.items.clear();
        }
    }

    impl CoreStack<i32> for MockStack {
        fn push(&mut self, value: i32) -> Result<(), FullError<i32>> {
            if self.is_full() {
                return Err(FullError(value));
            }
            self.items.push(value);
            Ok(())
        }

        fn pop(&mut self) -> Result<i32, EmptyError> {
            self.items.pop().ok_or(EmptyError)
        }

        fn peek(&self) -> Result<&i32, EmptyError> {
            self.items.last().ok_or(EmptyError)
        }

        fn capacity(&self) -> Option<usize> {
            self.capacity
        }
    }

    #[test]
    fn default_is_empty_derives_from_len() {
        let mut stack = MockStack {
            items: Vec::new(),
            capacity: None,
        };

        assert!(stack.is_empty());
        stack.push(1).unwrap();
        assert!(!stack.is_empty());
    }

    #[test]
    fn default_is_full_derives_from_capacity() {
        let mut bounded = MockStack {
            items: Vec::new(),
            capacity: Some(1),
        };
        assert!(!bounded.is_full());
        bounded.push(1).unwrap();
        assert!(bounded.is_full());
        assert_eq!(bounded.push(2).unwrap_err().into_inner(), 2);

        let mut unbounded = MockStack {
            items: Vec::new(),
            capacity: None,
        };
        for v in 0..100 {
            unbounded.push(v).unwrap();
        }
        assert!(!unbounded.is_full());
    }

    #[test]
    fn traits_are_object_safe() {
        let mut stack = MockStack {
            items: Vec::new(),
            capacity: Some(4),
        };
        let dyn_stack: &mut dyn CoreStack<i32> = &mut stack;

        dyn_stack.push(7).unwrap();
        assert_eq!(dyn_stack.peek(), Ok(&7));
        assert_eq!(dyn_stack.pop(), Ok(7));
        assert_eq!(dyn_stack.pop(), Err(EmptyError));
    }
}
