//! Singly linked lists whose links live inside the elements.
//!
//! In an intrusive linked list, the link is stored directly in the record that is being
//! linked. This means that the record must have a field that is a `SingleLink`. This is in
//! contrast to a non-intrusive linked list, where the nodes are allocated separately from the
//! data. [`boxed::BoxedList`] is that other flavour, built on top of the intrusive engine.
//!
//! # Examples
//!
//! ```
//! use slist::{
//!     Node,
//!     linked_list::intrusive::{list::LinkedList, single::SingleLink},
//! };
//!
//! #[derive(Node)]
//! struct Score {
//!     name: &'static str,
//!     #[node(data)]
//!     points: u32,
//!     link: SingleLink,
//! }
//!
//! let mut alice = Score {
//!     name: "alice",
//!     points: 7,
//!     link: SingleLink::new(),
//! };
//! let mut bob = Score {
//!     name: "bob",
//!     points: 3,
//!     link: SingleLink::new(),
//! };
//! let mut carol = Score {
//!     name: "carol",
//!     points: 5,
//!     link: SingleLink::new(),
//! };
//!
//! let mut list = LinkedList::new();
//! list.append(&mut alice);
//! list.append(&mut bob);
//! list.append(&mut carol);
//! assert_eq!(list.count(), 3);
//!
//! list.sort(|a, b| a.points <= b.points);
//! let names = list.fold(Vec::new(), |mut names, score| {
//!     names.push(score.name);
//!     names
//! });
//! assert_eq!(names, ["bob", "carol", "alice"]);
//!
//! list.map(|points| *points *= 10);
//! let mut out = String::new();
//! list.print(&mut out, |out, score| write!(out, "{}", score.points)).unwrap();
//! assert_eq!(out, "[30 50 70]");
//! # use core::fmt::Write;
//! ```
pub mod boxed;
pub mod intrusive;
