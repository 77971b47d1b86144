//! Singly linked lists built on embedded links.
//!
//! The list engine only ever touches [`SingleLink`] fields embedded in user records and
//! recovers the owning record through a field-offset projection. Two flavours are provided:
//!
//! - [`linked_list::intrusive`]: the caller owns the records, the list borrows them.
//! - [`linked_list::boxed`]: the list allocates a node per element and owns the payload.
//!
//! [`SingleLink`]: linked_list::intrusive::single::SingleLink
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
mod assert;

pub mod linked_list;

pub use slist_derive::Node;
