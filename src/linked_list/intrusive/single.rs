use core::ptr::NonNull;

use slist_derive::Node;

use super::traits::Link;

/// A ready-made record: a link plus a payload.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct SingleNode<T> {
    link: SingleLink,
    data: T,
}

impl<T> SingleNode<T> {
    /// Creates an unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            link: SingleLink::new(),
            data,
        }
    }

    /// Consumes the node and returns its payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Default> Default for SingleNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A link in a singly linked list.
///
/// Not `Clone`: a copy would alias the chain it points into.
#[derive(Debug, Default)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl SingleLink {
    /// Creates an unlinked link.
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// Whether this link currently points at a successor.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }
}

impl Link for SingleLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    unsafe fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}
