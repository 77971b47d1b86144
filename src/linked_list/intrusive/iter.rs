use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::traits::Node;

/// An iterator over the records of a [`LinkedList`](super::list::LinkedList).
pub struct Iter<'b, T: Node> {
    current: Option<NonNull<T>>,
    remaining: usize,
    _marker: PhantomData<&'b T>,
}

impl<'b, T> Iter<'b, T>
where
    T: Node,
{
    pub(super) fn new(head: Option<NonNull<T>>, count: usize) -> Self {
        Self {
            current: head,
            remaining: count,
            _marker: PhantomData,
        }
    }
}

impl<'b, T> Iterator for Iter<'b, T>
where
    T: Node,
{
    type Item = &'b T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            node
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'b, T> ExactSizeIterator for Iter<'b, T> where T: Node {}

impl<'b, T> FusedIterator for Iter<'b, T> where T: Node {}
