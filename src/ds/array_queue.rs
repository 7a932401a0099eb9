//! Fixed-capacity FIFO queue over a circular slot array.
//!
//! Uses a fixed-size slot array, a front cursor, and a live count. Enqueue
//! fills the slot just past the last element, wrapping modulo capacity, so
//! neither end of the queue ever shifts elements.
//!
//! ## Architecture
//!
//! ```text
//!   slots (capacity = 5)
//!
//!        0     1     2     3     4
//!     ┌─────┬─────┬─────┬─────┬─────┐
//!     │  C  │  D  │     │  A  │  B  │    front = 3, len = 4
//!     └─────┴─────┴─────┴─────┴─────┘
//!        ▲           ▲     ▲
//!        │           │     └─ front element (A)
//!        │           └─ next enqueue slot: (front + len) % capacity
//!        └─ wrapped tail (C, D follow B logically)
//!
//!   logical order: A ─ B ─ C ─ D
//!   dequeue ──► take A, front advances to 4
//!   rear    ──► D at (front + len - 1) % capacity
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation  | Time | Notes                                    |
//! |------------|------|------------------------------------------|
//! | `enqueue`  | O(1) | Refused with the value returned when full |
//! | `dequeue`  | O(1) | Front slot vacated, cursor advances       |
//! | `front`    | O(1) | No cursor movement                        |
//! | `rear`     | O(1) | No cursor movement                        |
//! | `iter`     | O(n) | Front-to-rear                             |
//!
//! ## Notes
//! - Slots are reused in place; a long-lived queue never reallocates.
//! - Full/empty checks run before any index arithmetic, so a zero-capacity
//!   queue is legal and simply refuses every enqueue.
//! - `debug_validate_invariants()` is available in debug/test builds.

use std::fmt;

use crate::error::{EmptyError, FullError};
use crate::traits::{Container, CoreQueue};

/// Bounded FIFO queue over a circular slot array.
///
/// # Example
///
/// ```
/// use containerkit::ds::ArrayQueue;
///
/// let mut queue = ArrayQueue::with_capacity(3);
/// queue.enqueue("a").unwrap();
/// queue.enqueue("b").unwrap();
/// queue.enqueue("c").unwrap();
///
/// assert_eq!(queue.enqueue("d").unwrap_err().into_inner(), "d");
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// queue.enqueue("d").unwrap(); // wraps into the vacated slot
/// assert_eq!(queue.rear(), Ok(&"d"));
/// ```
#[derive(Clone)]
pub struct ArrayQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> ArrayQueue<T> {
    /// Creates a queue bounded at `capacity` elements.
    ///
    /// All slots are allocated upfront. A capacity of zero is legal and
    /// produces a queue that refuses every enqueue.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            front: 0,
            len: 0,
        }
    }

    /// Returns the number of elements currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed capacity (number of slots).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the queue is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.slots.len()
    }

    /// Adds a value at the rear of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`FullError`] carrying `value` if the queue is full; the
    /// queue is unchanged.
    pub fn enqueue(&mut self, value: T) -> Result<(), FullError<T>> {
        if self.is_full() {
            return Err(FullError(value));
        }
        let slot = (self.front + self.len) % self.slots.len();
        self.slots[slot] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front value, advancing the front cursor.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        let value = self.slots[self.front].take().ok_or(EmptyError)?;
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        Ok(value)
    }

    /// Returns the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn front(&self) -> Result<&T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        self.slots[self.front].as_ref().ok_or(EmptyError)
    }

    /// Returns the rear value (most recently enqueued) without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn rear(&self) -> Result<&T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        let slot = (self.front + self.len - 1) % self.slots.len();
        self.slots[slot].as_ref().ok_or(EmptyError)
    }

    /// Removes all elements. Capacity and slot allocation are unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.front = 0;
        self.len = 0;
    }

    /// Returns an iterator from the front of the queue to the rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let capacity = self.slots.len();
        assert!(self.len <= capacity);
        if capacity == 0 {
            assert_eq!(self.len, 0);
            return;
        }
        assert!(self.front < capacity);

        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.len);

        for offset in 0..self.len {
            let slot = (self.front + offset) % capacity;
            assert!(self.slots[slot].is_some(), "hole inside the live window");
        }
    }
}

impl<T: Clone> ArrayQueue<T> {
    /// Materializes the contents front-to-rear into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Iterator over queued values from front to rear.
pub struct Iter<'a, T> {
    queue: &'a ArrayQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }
        let slot = (self.queue.front + self.offset) % self.queue.slots.len();
        self.offset += 1;
        self.queue.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset.min(self.queue.len);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Container for ArrayQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
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
/// use containerkit::ds::ArrayQueue;
///
/// fn window_sum<Q: CoreQueue<u32>>(queue: &mut Q, sample: u32, window: usize) -> u32 {
///     if queue.len() == window {
///         let _ = queue.dequeue();
///     }
///     let _ = queue.enqueue(sample);
///     queue.front().copied().unwrap_or(0) + queue.rear().copied().unwrap_or(0)
/// }
///
/// let mut queue = ArrayQueue::with_capacity(2);
/// window_sum(&mut queue, 1, 2);
/// window_sum(&mut queue, 2, 2);
/// assert_eq!(window_sum(&mut queue, 3, 2), 5); // front 2 + rear 3
/// ```
impl<T> CoreQueue<T> for ArrayQueue<T> {
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
        Some(self.slots.len())
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.is_full()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .field("front", &self.front)
            .finish()
    }
}
