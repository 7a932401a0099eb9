//! Error types for the containerkit library.
//!
//! ## Key Components
//!
//! - [`EmptyError`]: Returned by pop/dequeue/peek operations on a container
//!   with zero elements.
//! - [`FullError`]: Returned by push/enqueue on a fixed-capacity container
//!   that is already full; carries the rejected value back to the caller.
//! - [`IndexError`]: Returned when an index argument falls outside the valid
//!   range of a list operation.
//! - [`KeyNotFoundError`]: Returned by strict key operations when no matching
//!   entry exists.
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (e.g. an array backend built without a capacity).
//!
//! Every error is a recoverable result: no operation mutates state before its
//! precondition check, so the container remains fully usable after reporting
//! an error.
//!
//! ## Example Usage
//!
//! ```
//! use containerkit::ds::ArrayStack;
//! use containerkit::error::{EmptyError, FullError};
//!
//! let mut stack: ArrayStack<u32> = ArrayStack::with_capacity(1);
//!
//! // Underflow is reported, not panicked
//! assert_eq!(stack.pop(), Err(EmptyError));
//!
//! // Overflow hands the rejected value back
//! stack.push(1).unwrap();
//! let err: FullError<u32> = stack.push(2).unwrap_err();
//! assert_eq!(err.into_inner(), 2);
//!
//! // The stack is untouched by either failure
//! assert_eq!(stack.len(), 1);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// EmptyError
// ---------------------------------------------------------------------------

/// Error returned when an operation requires at least one element.
///
/// Produced by `pop`/`peek` on stacks, `dequeue`/`front`/`rear` on queues,
/// `pop_front`/`pop_back`/`front`/`back` on deques, and `pop_front`/`pop_back`
/// on the linked list.
///
/// # Example
///
/// ```
/// use containerkit::ds::LinkedQueue;
/// use containerkit::error::EmptyError;
///
/// let mut queue: LinkedQueue<i32> = LinkedQueue::new();
/// assert_eq!(queue.dequeue(), Err(EmptyError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container is empty")
    }
}

impl std::error::Error for EmptyError {}

// ---------------------------------------------------------------------------
// FullError
// ---------------------------------------------------------------------------

/// Error returned when a fixed-capacity container rejects an insertion.
///
/// Carries the value that could not be stored, so the caller keeps ownership
/// instead of losing it to a failed call.
///
/// # Example
///
/// ```
/// use containerkit::ds::ArrayQueue;
///
/// let mut queue: ArrayQueue<&str> = ArrayQueue::with_capacity(1);
/// queue.enqueue("a").unwrap();
///
/// let err = queue.enqueue("b").unwrap_err();
/// assert_eq!(err.into_inner(), "b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullError<T>(pub T);

impl<T> FullError<T> {
    /// Returns the value that could not be inserted.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for FullError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container is full")
    }
}

impl<T: fmt::Debug> std::error::Error for FullError<T> {}

// ---------------------------------------------------------------------------
// IndexError
// ---------------------------------------------------------------------------

/// Error returned when an index argument is out of range.
///
/// Reports the offending index together with the container length at the time
/// of the call. Removal and access require `index < len`; insertion allows
/// `index == len`.
///
/// # Example
///
/// ```
/// use containerkit::ds::SinglyLinkedList;
///
/// let list: SinglyLinkedList<u8> = SinglyLinkedList::new();
/// let err = list.get(3).unwrap_err();
/// assert_eq!(err.index(), 3);
/// assert_eq!(err.len(), 0);
/// assert_eq!(err.to_string(), "index 3 out of range for length 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    index: usize,
    len: usize,
}

impl IndexError {
    /// Creates a new `IndexError` for the given index and container length.
    #[inline]
    pub fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }

    /// Returns the rejected index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the container length at the time of the call.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}

impl std::error::Error for IndexError {}

// ---------------------------------------------------------------------------
// KeyNotFoundError
// ---------------------------------------------------------------------------

/// Error returned by strict key operations when the key is absent.
///
/// Lookups that can reasonably return an absent sentinel (`get`, `remove`)
/// return [`Option`] instead; this type is reserved for operations whose
/// contract requires an existing entry, such as
/// [`SimpleHashTable::replace`](crate::ds::SimpleHashTable::replace).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFoundError;

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found")
    }
}

impl std::error::Error for KeyNotFoundError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by builder `try_build()` methods and fallible operations such as
/// [`SimpleHashTable::rehash_to`](crate::ds::SimpleHashTable::rehash_to).
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use containerkit::builder::{StackBackend, StackBuilder};
///
/// // An array-backed stack needs a capacity
/// let err = StackBuilder::new().try_build::<u32>(StackBackend::Array).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
