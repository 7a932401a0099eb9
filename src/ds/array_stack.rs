//! Fixed-capacity LIFO stack over a contiguous buffer.
//!
//! ## Architecture
//!
//! ```text
//!   items (Vec<T>, never grows past capacity)
//!   ┌─────┬─────┬─────┬ ─ ─ ┬ ─ ─ ┐
//!   │  A  │  B  │  C  │     │     │   capacity = 5
//!   └─────┴─────┴─────┴ ─ ─ ┴ ─ ─ ┘
//!                  ▲
//!                 top (len - 1)
//!
//!   push ──► append at len (refused when len == capacity)
//!   pop  ──► remove at len - 1
//! ```
//!
//! ## Operations
//! - `push`: O(1), refused with the value returned when full
//! - `pop` / `peek`: O(1) at the top
//! - `iter`: top-to-bottom, O(n)
//!
//! The buffer is allocated once at construction; a full stack never
//! reallocates to make room.

use std::fmt;

use crate::error::{EmptyError, FullError};
use crate::traits::{Container, CoreStack};

/// Bounded LIFO stack backed by a pre-allocated `Vec`.
///
/// Capacity is fixed at construction. A push against a full stack is refused
/// before any mutation and hands the value back inside [`FullError`].
///
/// # Example
///
/// ```
/// use containerkit::ds::ArrayStack;
///
/// let mut stack = ArrayStack::with_capacity(2);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
///
/// assert_eq!(stack.push(3).unwrap_err().into_inner(), 3);
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    /// Creates a stack bounded at `capacity` elements.
    ///
    /// The backing buffer is allocated upfront. A capacity of zero is legal
    /// and produces a stack that refuses every push.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of elements currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the stack is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Pushes a value on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`FullError`] carrying `value` if the stack is full; the
    /// stack is unchanged.
    pub fn push(&mut self, value: T) -> Result<(), FullError<T>> {
        if self.is_full() {
            return Err(FullError(value));
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.items.pop().ok_or(EmptyError)
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.items.last().ok_or(EmptyError)
    }

    /// Removes all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator from the top of the stack downward, matching the
    /// order `pop` would yield values.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T: Clone> ArrayStack<T> {
    /// Materializes the contents top-to-bottom into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Container for ArrayStack<T> {
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
/// use containerkit::traits::CoreStack;
/// use containerkit::ds::ArrayStack;
///
/// fn top_or_default<S: CoreStack<i32>>(stack: &S) -> i32 {
///     stack.peek().copied().unwrap_or(0)
/// }
///
/// let mut stack = ArrayStack::with_capacity(4);
/// assert_eq!(top_or_default(&stack), 0);
/// stack.push(9).unwrap();
/// assert_eq!(top_or_default(&stack), 9);
/// ```
impl<T> CoreStack<T> for ArrayStack<T> {
    #[inline]
    fn push(&mut self, value: T) -> Result<(), FullError<T>> {
        self.push(value)
    }

    #[inline]
    fn pop(&mut self) -> Result<T, EmptyError> {
        self.pop()
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyError> {
        self.peek()
    }

    #[inline]
    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.is_full()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("top", &self.items.last())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_capacity_starts_empty() {
        let stack: ArrayStack<i32> = ArrayStack::with_capacity(4);
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), 4);
        assert!(!stack.is_full());
    }

    #[test]
    fn push_then_pop_is_lifo() {
        let mut stack = ArrayStack::with_capacity(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(EmptyError));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = ArrayStack::with_capacity(2);
        stack.push("a").unwrap();

        assert_eq!(stack.peek(), Ok(&"a"));
        assert_eq!(stack.peek(), Ok(&"a"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn push_at_capacity_hands_value_back() {
        let mut stack = ArrayStack::with_capacity(2);
        stack.push(10).unwrap();
        stack.push(20).unwrap();
        assert!(stack.is_full());

        let err = stack.push(30).unwrap_err();
        assert_eq!(err.into_inner(), 30);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn failed_push_leaves_stack_usable() {
        let mut stack = ArrayStack::with_capacity(1);
        stack.push(1).unwrap();
        stack.push(2).unwrap_err();

        assert_eq!(stack.to_vec(), vec![1]);
        assert_eq!(stack.pop(), Ok(1));
        stack.push(3).unwrap();
        assert_eq!(stack.peek(), Ok(&3));
    }

    #[test]
    fn empty_errors_before_any_mutation() {
        let mut stack: ArrayStack<u8> = ArrayStack::with_capacity(2);
        assert_eq!(stack.pop(), Err(EmptyError));
        assert_eq!(stack.peek(), Err(EmptyError));
        assert!(stack.is_empty());
    }

    #[test]
    fn zero_capacity_refuses_first_push() {
        let mut stack = ArrayStack::with_capacity(0);
        assert!(stack.is_full());
        assert_eq!(stack.push(1).unwrap_err().into_inner(), 1);
        assert_eq!(stack.pop(), Err(EmptyError));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut stack = ArrayStack::with_capacity(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 2);
        stack.push(3).unwrap();
        stack.push(4).unwrap();
        assert!(stack.is_full());
    }

    #[test]
    fn iter_runs_top_down() {
        let mut stack = ArrayStack::with_capacity(4);
        for v in [1, 2, 3] {
            stack.push(v).unwrap();
        }

        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(stack.iter().len(), 3);
    }

    #[test]
    fn debug_reports_len_and_capacity() {
        let mut stack = ArrayStack::with_capacity(2);
        stack.push(5).unwrap();

        let rendered = format!("{:?}", stack);
        assert!(rendered.contains("ArrayStack"));
        assert!(rendered.contains("len: 1"));
        assert!(rendered.contains("capacity: 2"));
    }
}
