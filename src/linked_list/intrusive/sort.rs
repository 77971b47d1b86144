use core::ptr::NonNull;

use super::{error::SortError, list::LinkedList, traits::Node};

impl<'a, T> LinkedList<'a, T>
where
    T: Node,
{
    /// Sort the list in place with an adjacent-swap bubble sort.
    ///
    /// Records are reordered by relinking; their contents never move. `le` must be a total
    /// order (`le(x, y) || le(y, x)` for every pair). Pairs for which `le` holds are never
    /// swapped, so records comparing equal keep their relative order.
    ///
    /// # Panics
    ///
    /// Panics if `le` turns out not to be a total order. See [`LinkedList::try_sort`].
    pub fn sort<F>(&mut self, le: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if let Err(e) = self.try_sort(le) {
            panic!("{e}");
        }
    }

    /// Like [`LinkedList::sort`], but reports a comparator that is not a total order instead of
    /// panicking. On error the list still holds exactly its original records, partially sorted.
    pub fn try_sort<F>(&mut self, mut le: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut passes = 0usize;
        let mut swaps = 0usize;
        loop {
            passes += 1;
            let swapped = self.bubble_pass(&mut le)?;
            tracing::trace!(pass = passes, swaps = swapped, "bubble pass finished");
            swaps += swapped;
            if swapped == 0 {
                break;
            }
        }
        tracing::debug!(passes, swaps, count = self.count(), "list sorted");
        Ok(())
    }

    /// One pass over every adjacent pair. Returns the number of swaps performed.
    fn bubble_pass<F>(&mut self, le: &mut F) -> Result<usize, SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut parent: Option<NonNull<T>> = None;
        let mut position = 0usize;
        let mut swaps = 0usize;

        while let Some(a) = self.next_after(parent) {
            let Some(b) = unsafe { a.as_ref() }.next() else {
                break;
            };

            let in_order = {
                let (left, right) = unsafe { (a.as_ref(), b.as_ref()) };
                let in_order = le(left, right);
                if !in_order && !le(right, left) {
                    tracing::error!(position, "comparator is not a total order");
                    self.check_invariants();
                    return Err(SortError::NotTotalOrder { position });
                }
                in_order
            };

            if in_order {
                parent = Some(a);
            } else {
                // parent -> a -> b -> rest  becomes  parent -> b -> a -> rest
                unsafe {
                    let rest = b.as_ref().next();
                    (*a.as_ptr()).set_next(rest);
                    (*b.as_ptr()).set_next(Some(a));
                }
                self.link_after(parent, Some(b));
                parent = Some(b);
                swaps += 1;
            }
            position += 1;
        }

        self.check_invariants();
        Ok(swaps)
    }
}
