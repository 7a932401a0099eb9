//! Container implementations.
//!
//! Linked structures (`SinglyLinkedList`, `LinkedStack`, `LinkedQueue`,
//! `Deque`) store their nodes in a [`NodeArena`] and link them by
//! [`NodeId`], so every node has exactly one owner and a stale handle can
//! never dangle. Array structures (`ArrayStack`, `ArrayQueue`) own a
//! fixed-capacity buffer. [`SimpleHashTable`] chains entries per bucket
//! over a fixed bucket array.

pub mod array_queue;
pub mod array_stack;
pub mod deque;
pub mod hash_table;
pub mod linked_list;
pub mod linked_queue;
pub mod linked_stack;
pub mod node_arena;

pub use array_queue::ArrayQueue;
pub use array_stack::ArrayStack;
pub use deque::Deque;
pub use hash_table::SimpleHashTable;
pub use linked_list::SinglyLinkedList;
pub use linked_queue::LinkedQueue;
pub use linked_stack::LinkedStack;
pub use node_arena::{NodeArena, NodeId};
