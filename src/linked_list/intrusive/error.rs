use thiserror::Error;

/// Errors reported by [`LinkedList::try_sort`](super::list::LinkedList::try_sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// Neither `le(a, b)` nor `le(b, a)` held for the pair starting at `position`.
    #[error("le comparator should be a total ordering (violated at position {position})")]
    NotTotalOrder {
        /// Index of the left element of the offending pair, counted from the head.
        position: usize,
    },
}
