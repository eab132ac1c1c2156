use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::{Copied, FusedIterator};
use std::slice;

use derive_more::{From, Into};
use kollekt_core_rs::num::Primitive;
use kollekt_core_rs::{Access, Compact, Container, Cursor, Edit, Indexer};

use super::{render_bracketed, sequence_eq, sequence_hash, PrimitiveIndexed, PrimitiveIterable};

/// Growable, contiguous list of unboxed primitive values.
#[derive(Debug, Clone, Default, From, Into)]
pub struct PrimitiveList<P: Primitive> {
    items: Vec<P>,
}

impl<P: Primitive> PrimitiveList<P> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: P) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<P> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[P] {
        &self.items
    }
}

impl<P: Primitive, const N: usize> From<[P; N]> for PrimitiveList<P> {
    fn from(values: [P; N]) -> Self {
        Self {
            items: values.to_vec(),
        }
    }
}

impl<P: Primitive> FromIterator<P> for PrimitiveList<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<P: Primitive> Extend<P> for PrimitiveList<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

/// Cursor over a [`PrimitiveList`], yielding values.
#[derive(Debug, Clone)]
pub struct ListCursor<'a, P: Primitive> {
    inner: Copied<slice::Iter<'a, P>>,
}

impl<P: Primitive> Iterator for ListCursor<'_, P> {
    type Item = P;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<P: Primitive> ExactSizeIterator for ListCursor<'_, P> {}

impl<P: Primitive> DoubleEndedIterator for ListCursor<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<P: Primitive> FusedIterator for ListCursor<'_, P> {}

impl<P: Primitive> Cursor for ListCursor<'_, P> {
    #[inline(always)]
    fn has_next(&self) -> bool {
        self.inner.len() > 0
    }
}

impl<P: Primitive> PrimitiveIterable for PrimitiveList<P> {
    type Prim = P;
    type PrimCursor<'a>
        = ListCursor<'a, P>
    where
        Self: 'a;

    fn prim_cursor(&self) -> Self::PrimCursor<'_> {
        ListCursor {
            inner: self.items.iter().copied(),
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<P: Primitive> PrimitiveIndexed for PrimitiveList<P> {
    #[inline(always)]
    fn at(&self, index: usize) -> P {
        self.items[index]
    }
}

impl<P: Primitive> Container for PrimitiveList<P> {
    type Elem = P;
    type Item<'a>
        = P
    where
        Self: 'a;
    type Cursor<'a>
        = ListCursor<'a, P>
    where
        Self: 'a;
    type Family = PrimitiveList<P>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.prim_cursor()
    }

    fn adopt<'a>(item: Self::Item<'a>) -> Self::Elem
    where
        Self: 'a,
    {
        item
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn access(&self) -> Access<'_, Self> {
        Access::Indexed(Indexer::new(self, self.items.len(), |list, index| {
            list.items[index]
        }))
    }
}

impl<P: Primitive> Compact for PrimitiveList<P> {
    type Elem = P;

    fn edit(&mut self) -> Edit<'_, Self::Elem> {
        Edit::Contiguous(&mut self.items)
    }
}

impl<P, R> PartialEq<R> for PrimitiveList<P>
where
    P: Primitive,
    R: PrimitiveIterable<Prim = P> + ?Sized,
{
    fn eq(&self, other: &R) -> bool {
        sequence_eq(self, other)
    }
}

impl<P: Primitive> Eq for PrimitiveList<P> {}

impl<P: Primitive> Hash for PrimitiveList<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        sequence_hash(self, state)
    }
}

impl<P: Primitive> Display for PrimitiveList<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_bracketed(self, f)
    }
}
