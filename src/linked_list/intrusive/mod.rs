//! # Intrusive Singly Linked List
//!
//! This module provides an implementation of an intrusive singly linked list.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits, such as `Link`, `Projection`, `Node` and `NodeWithData`.
//! - [`single::SingleLink`]: The link to embed in a record.
//! - [`single::SingleNode`]: A ready-made record holding a link and a payload.
//! - [`list::LinkedList`]: The list itself, with append, fold, map, print and sort.
//!
//! Records get their `Node` implementation from `#[derive(Node)]`, which computes the offset of
//! the link field. Given a pointer to that link the list recovers the record by subtracting the
//! offset; nothing else about the record is known to the list.
//!
//! ## Safety
//!
//! The safe API borrows every linked record for the lifetime of the list, which upholds:
//!
//! - Nodes must outlive the list they are in.
//! - A node must not be in two lists at the same time.
//! - Only the data of a linked node is handed out mutably, never its link.
//!
//! The `*_raw` methods and hand-written `Projection` impls move these obligations to the caller.

pub mod error;
pub mod iter;
pub mod list;
pub mod single;
mod sort;
pub mod traits;

#[cfg(test)]
mod tests;
