//! Unbounded LIFO stack over arena-backed list nodes.
//!
//! The top of the stack is the head of a [`SinglyLinkedList`], so push, pop,
//! and peek are all O(1) head operations. There is no capacity fence: a push
//! never fails, and through [`CoreStack`] the backing reports
//! `capacity() == None`.

use std::fmt;

use crate::ds::linked_list::{self, SinglyLinkedList};
use crate::error::{EmptyError, FullError};
use crate::traits::{Container, CoreStack};

/// Unbounded LIFO stack; the most recent push sits at the list head.
///
/// # Example
///
/// ```
/// use containerkit::ds::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Clone, Default)]
pub struct LinkedStack<T> {
    list: SinglyLinkedList<T>,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }

    /// Returns the number of elements currently on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes a value on top of the stack. Never fails.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.list.pop_front()
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.list.front().ok_or(EmptyError)
    }

    /// Removes all elements and frees the nodes.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from the top of the stack downward.
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: Clone> LinkedStack<T> {
    /// Materializes the contents top-to-bottom into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.list.to_vec()
    }
}

impl<T> Container for LinkedStack<T> {
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
/// use containerkit::ds::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// // Through the trait, push reports success like any bounded backing would
/// CoreStack::push(&mut stack, 1).unwrap();
/// assert_eq!(CoreStack::capacity(&stack), None);
/// assert!(!CoreStack::is_full(&stack));
/// ```
impl<T> CoreStack<T> for LinkedStack<T> {
    #[inline]
    fn push(&mut self, value: T) -> Result<(), FullError<T>> {
        self.push(value);
        Ok(())
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
        None
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the stack mirrors an unbounded Vec model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_vec_model(
            ops in prop::collection::vec((any::<bool>(), any::<i16>()), 0..100)
        ) {
            let mut stack = LinkedStack::new();
            let mut model: Vec<i16> = Vec::new();

            for (is_push, value) in ops {
                if is_push {
                    stack.push(value);
                    model.push(value);
                } else {
                    prop_assert_eq!(stack.pop().ok(), model.pop());
                }

                prop_assert_eq!(stack.len(), model.len());
                prop_assert_eq!(stack.peek().ok(), model.last());
            }
        }
    }
}
