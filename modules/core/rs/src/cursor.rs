use eyre::Result;

use crate::error::IterateError;

/// Forward-only, single-pass traversal handle.
///
/// Every cursor is a plain `Iterator`, so it composes with the standard adapters. On top of
/// that it can tell whether elements remain without consuming one, and offers a checked
/// `try_next` that reports exhaustion as an error instead of `None`.
pub trait Cursor: Iterator {
    fn has_next(&self) -> bool;

    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or_else(|| IterateError::Exhausted.into())
    }
}

impl<'a, T> Cursor for std::slice::Iter<'a, T> {
    #[inline(always)]
    fn has_next(&self) -> bool {
        self.len() > 0
    }
}

impl<'a, T> Cursor for std::collections::vec_deque::Iter<'a, T> {
    #[inline(always)]
    fn has_next(&self) -> bool {
        self.len() > 0
    }
}

impl<'a, T> Cursor for std::collections::linked_list::Iter<'a, T> {
    #[inline(always)]
    fn has_next(&self) -> bool {
        self.len() > 0
    }
}

impl<'a, T> Cursor for std::collections::btree_set::Iter<'a, T> {
    #[inline(always)]
    fn has_next(&self) -> bool {
        self.len() > 0
    }
}
