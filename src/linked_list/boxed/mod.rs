//! A list that owns its elements.
//!
//! Every append allocates one [`BoxedNode`] holding a link and a separately allocated payload.
//! The nodes are threaded through the intrusive [`LinkedList`], so the traversal and sort
//! algorithms are shared with borrowed records. `BoxedList<dyn Any>` ([`ErasedList`]) is the
//! type-erased form: callers downcast payloads to the type they know they stored.

use alloc::boxed::Box;
use core::{any::Any, fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use slist_derive::Node;

use super::intrusive::{error::SortError, iter, list::LinkedList, single::SingleLink};

/// A node allocated by a [`BoxedList`].
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct BoxedNode<T: ?Sized> {
    link: SingleLink,
    #[node(data)]
    payload: Box<T>,
}

impl<T: ?Sized> BoxedNode<T> {
    /// The payload owned by this node.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// A singly linked list that allocates its own nodes and owns every payload.
pub struct BoxedList<T: ?Sized> {
    list: LinkedList<'static, BoxedNode<T>>,
    _owns: PhantomData<Box<BoxedNode<T>>>,
}

/// A list of payloads whose types are only known to the caller.
pub type ErasedList = BoxedList<dyn Any>;

impl<T: ?Sized> BoxedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
            _owns: PhantomData,
        }
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Get the number of elements in the list
    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// The first element, if any.
    pub fn head(&self) -> Option<&T> {
        self.list.head().map(BoxedNode::payload)
    }

    /// Allocate a node for `payload` and attach it after the tail.
    pub fn append(&mut self, payload: Box<T>) {
        unsafe { self.list.append_raw(Self::alloc_node(payload)) }
    }

    /// Allocate a node for `payload` and link it in front of the head.
    pub fn push(&mut self, payload: Box<T>) {
        unsafe { self.list.push_raw(Self::alloc_node(payload)) }
    }

    /// Unlink the head, release its node and return the payload.
    pub fn pop(&mut self) -> Option<Box<T>> {
        self.list.pop_raw().map(|node| {
            // Every node in the list came from `alloc_node`.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            node.payload
        })
    }

    /// Reverse the list in place.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Get an iterator over the payloads, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Thread `init` through `f` for every payload, head to tail.
    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.list.fold(init, |acc, node| f(acc, node.payload()))
    }

    /// Like [`BoxedList::fold`], but `f` may rewrite each payload in place.
    pub fn fold_mut<B, F>(&mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &mut T) -> B,
    {
        self.list.fold_mut(init, |acc, payload| f(acc, &mut **payload))
    }

    /// Apply `f` to every payload, head to tail.
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        self.list.map(|payload| f(&mut **payload));
    }

    /// Sort by relinking nodes. See [`LinkedList::sort`].
    ///
    /// # Panics
    ///
    /// Panics if `le` is not a total order.
    pub fn sort<F>(&mut self, mut le: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.list.sort(|a, b| le(a.payload(), b.payload()));
    }

    /// Sort by relinking nodes. See [`LinkedList::try_sort`].
    pub fn try_sort<F>(&mut self, mut le: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.list.try_sort(|a, b| le(a.payload(), b.payload()))
    }

    /// Render the list as `[e1 e2 ... en]`.
    pub fn print<W, F>(&self, out: &mut W, mut print_elem: F) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        F: FnMut(&mut W, &T) -> fmt::Result,
    {
        self.list.print(out, |out, node| print_elem(out, node.payload()))
    }

    fn alloc_node(payload: Box<T>) -> NonNull<BoxedNode<T>> {
        NonNull::from(Box::leak(Box::new(BoxedNode {
            link: SingleLink::new(),
            payload,
        })))
    }
}

impl<T> BoxedList<T> {
    /// Consume the list and build a new one from `f` applied to every element, in order.
    ///
    /// This is how a list changes its element type, e.g. from strings to their lengths.
    pub fn map_into<U, F>(self, mut f: F) -> BoxedList<U>
    where
        F: FnMut(T) -> U,
    {
        self.into_iter().map(|payload| f(*payload)).collect()
    }
}

impl ErasedList {
    /// Box `value` and append it behind a type-erased pointer.
    pub fn append_value<U: Any>(&mut self, value: U) {
        self.append(Box::new(value));
    }
}

impl<T: ?Sized> Default for BoxedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Drop for BoxedList<T> {
    fn drop(&mut self) {
        if !self.is_empty() {
            tracing::trace!(count = self.count(), "releasing boxed list");
        }
        while self.pop().is_some() {}
    }
}

impl<T> FromIterator<T> for BoxedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for BoxedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Pushing is O(1) while appending walks the list. Build the new nodes reversed on their
        // own, so a panicking iterator leaves `self` untouched, and splice them on at the end.
        let mut tail = BoxedList::new();
        for payload in iter {
            tail.push(Box::new(payload));
        }
        tail.reverse();
        self.list.splice_back(&mut tail.list);
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for BoxedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, |f, payload| fmt::Display::fmt(payload, f))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for BoxedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the payloads of a [`BoxedList`].
pub struct Iter<'b, T: ?Sized> {
    inner: iter::Iter<'b, BoxedNode<T>>,
}

impl<'b, T: ?Sized> Iterator for Iter<'b, T> {
    type Item = &'b T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(BoxedNode::payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: ?Sized> ExactSizeIterator for Iter<'_, T> {}

impl<T: ?Sized> FusedIterator for Iter<'_, T> {}

/// An owning iterator that pops payloads off a [`BoxedList`].
pub struct IntoIter<T: ?Sized> {
    list: BoxedList<T>,
}

impl<T: ?Sized> Iterator for IntoIter<T> {
    type Item = Box<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.count(), Some(self.list.count()))
    }
}

impl<T: ?Sized> ExactSizeIterator for IntoIter<T> {}

impl<T: ?Sized> IntoIterator for BoxedList<T> {
    type Item = Box<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'b, T: ?Sized> IntoIterator for &'b BoxedList<T> {
    type Item = &'b T;
    type IntoIter = Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
