//! Convenience re-exports for the common case of `use containerkit::prelude::*;`.

pub use crate::ds::{
    ArrayQueue, ArrayStack, Deque, LinkedQueue, LinkedStack, SimpleHashTable, SinglyLinkedList,
};

pub use crate::builder::{Queue, QueueBackend, QueueBuilder, Stack, StackBackend, StackBuilder};
pub use crate::error::{ConfigError, EmptyError, FullError, IndexError, KeyNotFoundError};
pub use crate::traits::{Container, CoreQueue, CoreStack};
