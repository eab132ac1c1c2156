use std::collections::{BTreeSet, LinkedList, VecDeque};

use crate::capability::{Access, Indexer};
use crate::cursor::Cursor;

/// An ordered, finite sequence of elements that collection algorithms can traverse.
///
/// Containers differ in what their cursors yield: object containers lend references to the
/// stored values (`Item<'a> = &'a T`), primitive containers hand out the values themselves so
/// that nothing is boxed. `adopt` turns a yielded item back into an owned element when an
/// operation has to build a new container of the same `Family`.
///
/// Every container can be traversed with a cursor. Containers with O(1) positional reads
/// override `access` to report an [`Indexer`], which lets the engine pick indexed algorithm
/// bodies.
pub trait Container {
    type Elem;
    type Item<'a>
    where
        Self: 'a;
    type Cursor<'a>: Cursor<Item = Self::Item<'a>>
    where
        Self: 'a;
    /// Empty container of the same family, used for freshly allocated results.
    type Family: Default + Extend<Self::Elem>;

    fn cursor(&self) -> Self::Cursor<'_>;

    fn adopt<'a>(item: Self::Item<'a>) -> Self::Elem
    where
        Self: 'a;

    /// Number of elements. The default walks a cursor, indexed containers answer in O(1).
    fn size(&self) -> usize {
        self.cursor().count()
    }

    fn access(&self) -> Access<'_, Self> {
        Access::Sequential(self)
    }
}

impl<T: Clone> Container for [T] {
    type Elem = T;
    type Item<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type Family = Vec<T>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn adopt<'a>(item: Self::Item<'a>) -> Self::Elem
    where
        Self: 'a,
    {
        item.clone()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn access(&self) -> Access<'_, Self> {
        Access::Indexed(Indexer::new(self, self.len(), |slice, index| &slice[index]))
    }
}

impl<T: Clone> Container for Vec<T> {
    type Elem = T;
    type Item<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type Family = Vec<T>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn adopt<'a>(item: Self::Item<'a>) -> Self::Elem
    where
        Self: 'a,
    {
        item.clone()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn access(&self) -> Access<'_, Self> {
        Access::Indexed(Indexer::new(self, self.len(), |vec, index| &vec[index]))
    }
}

impl<T: Clone> Container for VecDeque<T> {
    type Elem = T;
    type Item<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;
    type Family = VecDeque<T>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn adopt<'a>(item: Self::Item<'a>) -> Self::Elem
    where
        Self: 'a,
    {
        item.clone()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn access(&self) -> Access<'_, Self> {
        Access::Indexed(Indexer::new(self, self.len(), |deque, index| &deque[index]))
    }
}

impl<T: Clone> Container for LinkedList<T> {
    type Elem = T;
    type Item<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::collections::linked_list::Iter<'a, T>
    where
        Self: 'a;
    type Family = LinkedList<T>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn adopt<'a>(item: Self::Item<'a>) -> Self::Elem
    where
        Self: 'a,
    {
        item.clone()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Ord + Clone> Container for BTreeSet<T> {
    type Elem = T;
    type Item<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        Self: 'a;
    type Family = BTreeSet<T>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn adopt<'a>(item: Self::Item<'a>) -> Self::Elem
    where
        Self: 'a,
    {
        item.clone()
    }

    fn size(&self) -> usize {
        self.len()
    }
}
