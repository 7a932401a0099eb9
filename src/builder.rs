//! Unified builders for stacks and queues over either backing.
//!
//! Provides a single construction API that picks the array-backed or
//! linked-node backing at runtime and hides the concrete type behind a
//! wrapper with one consistent surface.
//!
//! ## Example
//!
//! ```rust
//! use containerkit::builder::{QueueBackend, QueueBuilder, StackBackend, StackBuilder};
//!
//! let mut stack = StackBuilder::new()
//!     .capacity(100)
//!     .try_build::<u64>(StackBackend::Array)
//!     .unwrap();
//! stack.push(1).unwrap();
//! assert_eq!(stack.pop(), Ok(1));
//!
//! let mut queue = QueueBuilder::new()
//!     .try_build::<String>(QueueBackend::Linked)
//!     .unwrap();
//! queue.enqueue("hello".to_string()).unwrap();
//! assert_eq!(queue.front().map(String::as_str), Ok("hello"));
//! ```

use crate::ds::{ArrayQueue, ArrayStack, LinkedQueue, LinkedStack};
use crate::error::{ConfigError, EmptyError, FullError};
use crate::traits::{Container, CoreQueue, CoreStack};

/// Available stack backings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackBackend {
    /// Contiguous buffer with a fixed capacity.
    Array,
    /// Arena-backed linked nodes, unbounded.
    Linked,
}

/// Available queue backings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueBackend {
    /// Circular slot array with a fixed capacity.
    Array,
    /// Arena-backed linked nodes, unbounded.
    Linked,
}

/// Unified stack wrapper with a consistent API regardless of backing.
///
/// Also implements [`Container`] and [`CoreStack`], so a builder-constructed
/// stack drops into any function written against the capability traits.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    inner: StackInner<T>,
}

#[derive(Debug, Clone)]
enum StackInner<T> {
    Array(ArrayStack<T>),
    Linked(LinkedStack<T>),
}

impl<T> Stack<T> {
    /// Push a value on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`FullError`] if an array backing is at capacity; a linked
    /// backing never refuses.
    pub fn push(&mut self, value: T) -> Result<(), FullError<T>> {
        match &mut self.inner {
            StackInner::Array(stack) => stack.push(value),
            StackInner::Linked(stack) => {
                stack.push(value);
                Ok(())
            },
        }
    }

    /// Remove and return the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        match &mut self.inner {
            StackInner::Array(stack) => stack.pop(),
            StackInner::Linked(stack) => stack.pop(),
        }
    }

    /// Return the top value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        match &self.inner {
            StackInner::Array(stack) => stack.peek(),
            StackInner::Linked(stack) => stack.peek(),
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        match &self.inner {
            StackInner::Array(stack) => stack.len(),
            StackInner::Linked(stack) => stack.len(),
        }
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the capacity, or `None` for the linked backing.
    pub fn capacity(&self) -> Option<usize> {
        match &self.inner {
            StackInner::Array(stack) => Some(stack.capacity()),
            StackInner::Linked(_) => None,
        }
    }

    /// Check if a push would be refused.
    pub fn is_full(&self) -> bool {
        match &self.inner {
            StackInner::Array(stack) => stack.is_full(),
            StackInner::Linked(_) => false,
        }
    }

    /// Clear all elements.
    pub fn clear(&mut self) {
        match &mut self.inner {
            StackInner::Array(stack) => stack.clear(),
            StackInner::Linked(stack) => stack.clear(),
        }
    }
}

impl<T> Container for Stack<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> CoreStack<T> for Stack<T> {
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
        self.capacity()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.is_full()
    }
}

/// Unified queue wrapper with a consistent API regardless of backing.
///
/// Also implements [`Container`] and [`CoreQueue`], so a builder-constructed
/// queue drops into any function written against the capability traits.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    inner: QueueInner<T>,
}

#[derive(Debug, Clone)]
enum QueueInner<T> {
    Array(ArrayQueue<T>),
    Linked(LinkedQueue<T>),
}

impl<T> Queue<T> {
    /// Add a value at the rear of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`FullError`] if an array backing is at capacity; a linked
    /// backing never refuses.
    pub fn enqueue(&mut self, value: T) -> Result<(), FullError<T>> {
        match &mut self.inner {
            QueueInner::Array(queue) => queue.enqueue(value),
            QueueInner::Linked(queue) => {
                queue.enqueue(value);
                Ok(())
            },
        }
    }

    /// Remove and return the front value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        match &mut self.inner {
            QueueInner::Array(queue) => queue.dequeue(),
            QueueInner::Linked(queue) => queue.dequeue(),
        }
    }

    /// Return the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn front(&self) -> Result<&T, EmptyError> {
        match &self.inner {
            QueueInner::Array(queue) => queue.front(),
            QueueInner::Linked(queue) => queue.front(),
        }
    }

    /// Return the rear value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn rear(&self) -> Result<&T, EmptyError> {
        match &self.inner {
            QueueInner::Array(queue) => queue.rear(),
            QueueInner::Linked(queue) => queue.rear(),
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        match &self.inner {
            QueueInner::Array(queue) => queue.len(),
            QueueInner::Linked(queue) => queue.len(),
        }
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the capacity, or `None` for the linked backing.
    pub fn capacity(&self) -> Option<usize> {
        match &self.inner {
            QueueInner::Array(queue) => Some(queue.capacity()),
            QueueInner::Linked(_) => None,
        }
    }

    /// Check if an enqueue would be refused.
    pub fn is_full(&self) -> bool {
        match &self.inner {
            QueueInner::Array(queue) => queue.is_full(),
            QueueInner::Linked(_) => false,
        }
    }

    /// Clear all elements.
    pub fn clear(&mut self) {
        match &mut self.inner {
            QueueInner::Array(queue) => queue.clear(),
            QueueInner::Linked(queue) => queue.clear(),
        }
    }
}

impl<T> Container for Queue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> CoreQueue<T> for Queue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) -> Result<(), FullError<T>> {
        self.enqueue(value)
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
        self.capacity()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.is_full()
    }
}

/// Builder for stack instances.
#[derive(Debug, Clone, Default)]
pub struct StackBuilder {
    capacity: Option<usize>,
}

impl StackBuilder {
    /// Create a builder with no capacity set.
    pub fn new() -> Self {
        Self { capacity: None }
    }

    /// Set the capacity for an array backing.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build a stack with the chosen backing.
    ///
    /// The array backing requires a capacity; the linked backing refuses
    /// one, since it can never enforce it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on a backend/capacity mismatch.
    ///
    /// # Example
    ///
    /// ```rust
    /// use containerkit::builder::{StackBackend, StackBuilder};
    ///
    /// let stack = StackBuilder::new()
    ///     .capacity(8)
    ///     .try_build::<u32>(StackBackend::Array)
    ///     .unwrap();
    /// assert_eq!(stack.capacity(), Some(8));
    ///
    /// // Array backing without a capacity is refused
    /// assert!(StackBuilder::new().try_build::<u32>(StackBackend::Array).is_err());
    ///
    /// // Linked backing with a capacity is refused
    /// assert!(
    ///     StackBuilder::new()
    ///         .capacity(8)
    ///         .try_build::<u32>(StackBackend::Linked)
    ///         .is_err()
    /// );
    /// ```
    pub fn try_build<T>(self, backend: StackBackend) -> Result<Stack<T>, ConfigError> {
        let inner = match (backend, self.capacity) {
            (StackBackend::Array, Some(capacity)) => {
                StackInner::Array(ArrayStack::with_capacity(capacity))
            },
            (StackBackend::Array, None) => {
                return Err(ConfigError::new("array backend requires a capacity"));
            },
            (StackBackend::Linked, None) => StackInner::Linked(LinkedStack::new()),
            (StackBackend::Linked, Some(_)) => {
                return Err(ConfigError::new(
                    "linked backend is unbounded and does not take a capacity",
                ));
            },
        };

        Ok(Stack { inner })
    }
}

/// Builder for queue instances.
#[derive(Debug, Clone, Default)]
pub struct QueueBuilder {
    capacity: Option<usize>,
}

impl QueueBuilder {
    /// Create a builder with no capacity set.
    pub fn new() -> Self {
        Self { capacity: None }
    }

    /// Set the capacity for an array backing.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build a queue with the chosen backing.
    ///
    /// The array backing requires a capacity; the linked backing refuses
    /// one, since it can never enforce it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on a backend/capacity mismatch.
    ///
    /// # Example
    ///
    /// ```rust
    /// use containerkit::builder::{QueueBackend, QueueBuilder};
    ///
    /// let queue = QueueBuilder::new()
    ///     .capacity(16)
    ///     .try_build::<u32>(QueueBackend::Array)
    ///     .unwrap();
    /// assert_eq!(queue.capacity(), Some(16));
    ///
    /// let unbounded = QueueBuilder::new().try_build::<u32>(QueueBackend::Linked).unwrap();
    /// assert_eq!(unbounded.capacity(), None);
    /// ```
    pub fn try_build<T>(self, backend: QueueBackend) -> Result<Queue<T>, ConfigError> {
        let inner = match (backend, self.capacity) {
            (QueueBackend::Array, Some(capacity)) => {
                QueueInner::Array(ArrayQueue::with_capacity(capacity))
            },
            (QueueBackend::Array, None) => {
                return Err(ConfigError::new("array backend requires a capacity"));
            },
            (QueueBackend::Linked, None) => QueueInner::Linked(LinkedQueue::new()),
            (QueueBackend::Linked, Some(_)) => {
                return Err(ConfigError::new(
                    "linked backend is unbounded and does not take a capacity",
                ));
            },
        };

        Ok(Queue { inner })
    }
}
