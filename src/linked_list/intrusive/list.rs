use core::{fmt, marker::PhantomData, ptr::NonNull};

use super::{
    iter::Iter,
    traits::{Node, NodeWithData},
};

/// A generic intrusive singly linked list.
///
/// The list borrows every record it links for `'a`, so a linked record can be neither moved,
/// dropped, nor linked into a second list. Records are handed back by [`LinkedList::pop`] and
/// [`LinkedList::remove`]; dropping the list simply forgets the chain.
///
/// Only the list relinks its members. The list has no `set_next` of its own:
///
/// ```compile_fail
/// use slist::linked_list::intrusive::{list::LinkedList, single::SingleNode};
///
/// let mut stray = SingleNode::new(1);
/// let mut list = LinkedList::<SingleNode<i32>>::new();
/// list.set_next(Some(core::ptr::NonNull::from(&mut stray)));
/// ```
///
/// and rewriting a record's link is `unsafe`:
///
/// ```compile_fail,E0133
/// use slist::linked_list::intrusive::{single::SingleNode, traits::Link};
///
/// let mut node = SingleNode::new(1);
/// node.set_next(None);
/// ```
///
/// A record must outlive its membership:
///
/// ```compile_fail,E0597
/// use slist::linked_list::intrusive::{list::LinkedList, single::SingleNode};
///
/// let mut list = LinkedList::new();
/// {
///     let mut node = SingleNode::new(7);
///     list.append(&mut node);
/// }
/// assert_eq!(list.count(), 1);
/// ```
pub struct LinkedList<'a, T: Node> {
    head: Option<NonNull<T>>,
    count: usize,
    // Borrows records for `'a` and stays invariant in `T`, without demanding `T: 'a` up front.
    _marker: PhantomData<(&'a mut (), fn(T) -> T)>,
}

impl<'a, T> LinkedList<'a, T>
where
    T: Node,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Get the head of the linked list
    pub fn head(&self) -> Option<&T> {
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    /// Check if the linked list is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the number of nodes in the linked list
    pub fn count(&self) -> usize {
        self.count
    }

    /// Attach `node` after the current tail. The node becomes the head of an empty list.
    ///
    /// No tail pointer is kept, so this walks the whole list.
    pub fn append(&mut self, node: &'a mut T) {
        unsafe { self.append_raw(NonNull::from(node)) }
    }

    /// Raw form of [`LinkedList::append`].
    ///
    /// # Safety
    ///
    /// `node` must point to a live `T` that outlives its membership in this list, is not
    /// linked into any list, and is not accessed through other pointers while linked.
    pub unsafe fn append_raw(&mut self, node: NonNull<T>) {
        let tail = self.tail();
        unsafe { (*node.as_ptr()).set_next(None) };
        self.link_after(tail, Some(node));
        self.count += 1;
        self.check_invariants();
    }

    /// Link `node` in front of the current head.
    pub fn push(&mut self, node: &'a mut T) {
        unsafe { self.push_raw(NonNull::from(node)) }
    }

    /// Raw form of [`LinkedList::push`].
    ///
    /// # Safety
    ///
    /// Same contract as [`LinkedList::append_raw`].
    pub unsafe fn push_raw(&mut self, node: NonNull<T>) {
        unsafe { (*node.as_ptr()).set_next(self.head) };
        self.head = Some(node);
        self.count += 1;
        self.check_invariants();
    }

    /// Detach the head and hand the record back.
    pub fn pop(&mut self) -> Option<&'a mut T> {
        self.pop_raw().map(|node| unsafe { &mut *node.as_ptr() })
    }

    /// Raw form of [`LinkedList::pop`]. The returned node is fully detached.
    pub fn pop_raw(&mut self) -> Option<NonNull<T>> {
        self.head.inspect(|head| {
            self.unlink(None, *head);
            self.check_invariants();
        })
    }

    /// Unlink the record at `node`, if it is in this list, and hand it back.
    ///
    /// Only the address is compared, so `node` may be any pointer.
    pub fn remove(&mut self, node: NonNull<T>) -> Option<&'a mut T> {
        let mut parent: Option<NonNull<T>> = None;
        let mut current = self.head;
        while let Some(cur) = current {
            if cur == node {
                self.unlink(parent, cur);
                self.check_invariants();
                return Some(unsafe { &mut *cur.as_ptr() });
            }
            parent = Some(cur);
            current = unsafe { cur.as_ref() }.next();
        }
        None
    }

    /// Reverse the list in place by relinking.
    pub fn reverse(&mut self) {
        let mut reversed: Option<NonNull<T>> = None;
        let mut current = self.head.take();
        while let Some(node) = current {
            let node_ref = unsafe { &mut *node.as_ptr() };
            current = node_ref.next();
            unsafe { node_ref.set_next(reversed) };
            reversed = Some(node);
        }
        self.head = reversed;
        self.check_invariants();
    }

    /// Get an iterator over the records, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.count)
    }

    /// Thread `init` through `f` for every record, head to tail, and return the result.
    ///
    /// An empty list returns `init` untouched.
    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, f)
    }

    /// Like [`LinkedList::fold`], but `f` may rewrite each record's data in place.
    pub fn fold_mut<B, F>(&mut self, init: B, mut f: F) -> B
    where
        T: NodeWithData,
        F: FnMut(B, &mut T::Data) -> B,
    {
        let mut acc = init;
        let mut current = self.head;
        while let Some(node) = current {
            let node_ref = unsafe { &mut *node.as_ptr() };
            current = node_ref.next();
            acc = f(acc, node_ref.data_mut());
        }
        acc
    }

    /// Apply `f` to each record's data, head to tail. The shape of the list is unchanged.
    pub fn map<F>(&mut self, mut f: F)
    where
        T: NodeWithData,
        F: FnMut(&mut T::Data),
    {
        self.fold_mut((), |(), data| f(data));
    }

    /// Render the list as `[e1 e2 ... en]`, with `print_elem` writing each element.
    pub fn print<W, F>(&self, out: &mut W, mut print_elem: F) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        F: FnMut(&mut W, &T) -> fmt::Result,
    {
        out.write_char('[')?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            print_elem(out, node)?;
        }
        out.write_char(']')
    }

    /// Move every node of `other` behind the tail of this list, leaving `other` empty.
    pub fn splice_back(&mut self, other: &mut LinkedList<'a, T>) {
        let Some(head) = other.head.take() else {
            return;
        };
        let tail = self.tail();
        self.link_after(tail, Some(head));
        self.count += core::mem::take(&mut other.count);
        self.check_invariants();
    }

    /// Rewrite the next pointer of `parent`, or the head when `parent` is `None`.
    ///
    /// `parent` and `next` must be members of this list (or `next` a node being linked in).
    pub(super) fn link_after(&mut self, parent: Option<NonNull<T>>, next: Option<NonNull<T>>) {
        match parent {
            Some(parent) => unsafe { (*parent.as_ptr()).set_next(next) },
            None => self.head = next,
        }
    }

    /// Detach `node`, whose predecessor is `parent` (`None` for the head), and clear its link.
    fn unlink(&mut self, parent: Option<NonNull<T>>, node: NonNull<T>) {
        strict_assert_eq!(self.next_after(parent), Some(node), "parent must precede the node");
        let next = unsafe { node.as_ref() }.next();
        self.link_after(parent, next);
        unsafe { (*node.as_ptr()).set_next(None) };
        strict_assert!(self.count > 0, "a linked node implies a non-zero count");
        self.count -= 1;
    }

    /// The node following `parent`, or the head when `parent` is `None`.
    pub(super) fn next_after(&self, parent: Option<NonNull<T>>) -> Option<NonNull<T>> {
        match parent {
            Some(parent) => unsafe { parent.as_ref() }.next(),
            None => self.head,
        }
    }

    fn tail(&self) -> Option<NonNull<T>> {
        let mut current = self.head?;
        while let Some(next) = unsafe { current.as_ref() }.next() {
            current = next;
        }
        Some(current)
    }

    pub(super) fn check_invariants(&self) {
        if cfg!(any(debug_assertions, feature = "strict_assertions")) {
            // Bounded walk: a cycle shows up as one extra node instead of hanging.
            let mut walked = 0;
            let mut current = self.head;
            while let Some(node) = current {
                walked += 1;
                if walked > self.count {
                    break;
                }
                current = unsafe { node.as_ref() }.next();
            }
            strict_assert_eq!(walked, self.count, "walked length must match the node count");
        }
    }
}

impl<'a, T> Default for LinkedList<'a, T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> fmt::Debug for LinkedList<'a, T>
where
    T: Node,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("head", &self.head)
            .field("count", &self.count)
            .finish()
    }
}

impl<'b, 'a, T> IntoIterator for &'b LinkedList<'a, T>
where
    T: Node,
{
    type Item = &'b T;
    type IntoIter = Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
