//! Building-block containers.
//!
//! - `linked_list`: singly linked sequence, used for adjacency lists
//! - `queue`: bounded FIFO queues behind the [`Queue`] trait
//! - `stack`: bounded LIFO stack

pub mod linked_list;
pub mod queue;
pub mod stack;

pub use linked_list::LinkedList;
pub use queue::{ArrayQueue, LinkedQueue, Queue};
pub use stack::ArrayStack;
