//! containerkit: generic stack, queue, deque, linked-list, and hash-table
//! containers with array-backed and linked-node backings.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod prelude;
pub mod traits;

pub use crate::builder::{Queue, QueueBuilder, Stack, StackBuilder};
pub use crate::ds::{
    ArrayQueue, ArrayStack, Deque, LinkedQueue, LinkedStack, SimpleHashTable, SinglyLinkedList,
};
pub use crate::error::{ConfigError, EmptyError, FullError, IndexError, KeyNotFoundError};
