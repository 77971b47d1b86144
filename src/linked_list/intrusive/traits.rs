use core::ptr::NonNull;

use super::single::SingleLink;

/// A trait for a link in a linked list.
pub trait Link {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    ///
    /// # Safety
    ///
    /// `next` must be `None` or point to a live target that stays valid for as long as this link
    /// can be followed. Rewriting the link of a node that is in a `LinkedList` also desyncs the
    /// list's count; only the list itself relinks its members.
    unsafe fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// Conversion between a record and the [`SingleLink`] embedded in it.
///
/// This is the one place where the list lies to the type system: a link pointer is turned
/// back into a pointer to its owning record by subtracting the field offset.
///
/// # Safety
///
/// `LINK_OFFSET` must be the byte offset of a `SingleLink` field inside `Self`.
/// Prefer `#[derive(Node)]`, which computes it with [`core::mem::offset_of!`].
pub unsafe trait Projection: Sized {
    /// Byte offset of the embedded link inside the record.
    const LINK_OFFSET: usize;

    /// Project a record pointer onto its embedded link.
    ///
    /// The returned pointer keeps the provenance of the whole record, so it can be
    /// projected back with [`Projection::from_link`].
    #[inline]
    fn to_link(item: NonNull<Self>) -> NonNull<SingleLink> {
        unsafe { item.byte_add(Self::LINK_OFFSET).cast() }
    }

    /// Recover the owning record from a link pointer.
    ///
    /// # Safety
    ///
    /// `link` must have been produced by [`Projection::to_link`] from a pointer to a live
    /// `Self`. Passing a link embedded in any other type is undefined behavior.
    #[inline]
    unsafe fn from_link(link: NonNull<SingleLink>) -> NonNull<Self> {
        unsafe { link.byte_sub(Self::LINK_OFFSET).cast() }
    }
}

/// Borrow the record that owns `link`.
///
/// # Safety
///
/// Same contract as [`Projection::from_link`], and the record must stay alive and
/// unaliased by mutable references for `'r`.
pub unsafe fn element_of<'r, T: Projection>(link: NonNull<SingleLink>) -> &'r T {
    unsafe { T::from_link(link).as_ref() }
}

/// A trait for a node in a linked list.
///
/// Nodes are linked and unlinked by `LinkedList` only; the trait itself grants no way to splice a
/// node into a list.
pub trait Node: Link<Target = Self> + Projection {}

/// A trait for a node that contains data.
///
/// The data is the only part of a record handed out mutably while the record is linked.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data: ?Sized;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
