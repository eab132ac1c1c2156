use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use kollekt_core_rs::{Access, Container, Cursor, Indexer};

use super::{
    render_bracketed, sequence_eq, sequence_hash, PrimitiveIndexed, PrimitiveIterable,
    PrimitiveList,
};

/// Non-materializing reversed view over an indexed primitive container.
///
/// Position `i` of the view is position `len - 1 - i` of the source. The view only borrows the
/// source: every query re-reads it, so nothing is copied or cached.
pub struct ReversedView<'a, L: PrimitiveIndexed + ?Sized> {
    source: &'a L,
}

impl<'a, L: PrimitiveIndexed + ?Sized> ReversedView<'a, L> {
    pub fn new(source: &'a L) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a L {
        self.source
    }
}

impl<L: PrimitiveIndexed + ?Sized> Clone for ReversedView<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: PrimitiveIndexed + ?Sized> Copy for ReversedView<'_, L> {}

/// Cursor walking a source from its last position to its first.
pub struct ReversedCursor<'a, L: PrimitiveIndexed + ?Sized> {
    source: &'a L,
    remaining: usize,
}

impl<L: PrimitiveIndexed + ?Sized> Iterator for ReversedCursor<'_, L> {
    type Item = L::Prim;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.source.at(self.remaining))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L: PrimitiveIndexed + ?Sized> ExactSizeIterator for ReversedCursor<'_, L> {}

impl<L: PrimitiveIndexed + ?Sized> FusedIterator for ReversedCursor<'_, L> {}

impl<L: PrimitiveIndexed + ?Sized> Cursor for ReversedCursor<'_, L> {
    #[inline(always)]
    fn has_next(&self) -> bool {
        self.remaining > 0
    }
}

impl<L: PrimitiveIndexed + ?Sized> PrimitiveIterable for ReversedView<'_, L> {
    type Prim = L::Prim;
    type PrimCursor<'b>
        = ReversedCursor<'b, L>
    where
        Self: 'b;

    fn prim_cursor(&self) -> Self::PrimCursor<'_> {
        ReversedCursor {
            source: self.source,
            remaining: self.source.len(),
        }
    }

    fn len(&self) -> usize {
        self.source.len()
    }
}

impl<L: PrimitiveIndexed + ?Sized> PrimitiveIndexed for ReversedView<'_, L> {
    fn at(&self, index: usize) -> Self::Prim {
        let len = self.source.len();
        assert!(
            index < len,
            "index {index} is out of bounds for a reversed view of length {len}"
        );
        self.source.at(len - 1 - index)
    }
}

impl<L: PrimitiveIndexed + ?Sized> Container for ReversedView<'_, L> {
    type Elem = L::Prim;
    type Item<'b>
        = L::Prim
    where
        Self: 'b;
    type Cursor<'b>
        = ReversedCursor<'b, L>
    where
        Self: 'b;
    type Family = PrimitiveList<L::Prim>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.prim_cursor()
    }

    fn adopt<'b>(item: Self::Item<'b>) -> Self::Elem
    where
        Self: 'b,
    {
        item
    }

    fn size(&self) -> usize {
        self.source.len()
    }

    fn access(&self) -> Access<'_, Self> {
        Access::Indexed(Indexer::new(self, self.source.len(), |view, index| {
            view.at(index)
        }))
    }
}

impl<L, R> PartialEq<R> for ReversedView<'_, L>
where
    L: PrimitiveIndexed + ?Sized,
    R: PrimitiveIterable<Prim = L::Prim> + ?Sized,
{
    fn eq(&self, other: &R) -> bool {
        sequence_eq(self, other)
    }
}

impl<L: PrimitiveIndexed + ?Sized> Eq for ReversedView<'_, L> {}

impl<L: PrimitiveIndexed + ?Sized> Hash for ReversedView<'_, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        sequence_hash(self, state)
    }
}

impl<L: PrimitiveIndexed + ?Sized> Display for ReversedView<'_, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render_bracketed(self, f)
    }
}

impl<L: PrimitiveIndexed + ?Sized> Debug for ReversedView<'_, L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.prim_cursor()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use kollekt_core_rs::{plan, IterateError, Plan};

    use super::*;
    use crate::iterate;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_is_empty() {
        let list = PrimitiveList::from([false, false, true]);
        let empty = PrimitiveList::<bool>::new();
        assert!(empty.as_reversed().is_empty());
        assert!(list.as_reversed().not_empty());
        assert_eq!(empty.as_reversed().len(), 0);
        assert_eq!(list.as_reversed().len(), 3);
    }

    #[test]
    fn test_contains_all() {
        let list = PrimitiveList::from([true, false, true]);
        let view = list.as_reversed();
        assert!(view.contains_all(&[true]));
        assert!(view.contains_all(&[true, false]));
        assert!(!PrimitiveList::from([false, false]).as_reversed().contains_all(&[true]));
    }

    #[test]
    fn test_cursor() {
        let list = PrimitiveList::from([false, false, true]);
        let view = list.as_reversed();
        let mut cursor = view.prim_cursor();
        for expected in [true, false, false] {
            assert!(cursor.has_next());
            assert_eq!(cursor.next(), Some(expected));
        }
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);

        // Cursors never share position
        assert_eq!(view.prim_cursor().len(), 3);
    }

    #[test]
    fn test_cursor_exhaustion() {
        let list = PrimitiveList::from([false, false, true]);
        let view = list.as_reversed();
        let mut cursor = view.prim_cursor();
        while cursor.has_next() {
            assert!(cursor.try_next().is_ok());
        }
        let error = cursor.try_next().unwrap_err();
        assert_eq!(
            error.downcast_ref::<IterateError>(),
            Some(&IterateError::Exhausted)
        );
    }

    #[test]
    fn test_queries() {
        let list = PrimitiveList::from([false, false, true]);
        let view = list.as_reversed();

        let mut all = true;
        view.for_each(|x| all &= x);
        assert!(!all);

        assert_eq!(view.count(|x| !x), 2);
        assert_eq!(view.select(|x| !x).len(), 2);
        assert_eq!(view.select(|x| x).len(), 1);
        assert_eq!(view.reject(|x| !x).len(), 1);
        assert_eq!(view.reject(|x| x).len(), 2);
        assert_eq!(view.collect(|x| !x), vec![false, true, true]);

        let pair = PrimitiveList::from([true, false]);
        assert!(pair.as_reversed().any_satisfy(|x| !x));
        assert!(!PrimitiveList::from([true]).as_reversed().any_satisfy(|x| !x));
        assert!(!pair.as_reversed().all_satisfy(|x| !x));
        assert!(PrimitiveList::from([false, false]).as_reversed().all_satisfy(|x| !x));
        assert!(pair.as_reversed().any_satisfy_with(|x, y| x == *y, true));
        assert!(!pair.as_reversed().all_satisfy_with(|x, y| x == *y, true));

        let falses = PrimitiveList::from([false, false]);
        assert!(!falses.as_reversed().detect_if_none(|x| !x, true));
        assert!(falses.as_reversed().detect_if_none(|x| x, true));
    }

    #[test]
    fn test_select_keeps_reversed_order() {
        let list = PrimitiveList::from([1i32, 2, 3, 4, 5]);
        let view = list.as_reversed();
        assert_eq!(view.select(|x| x % 2 == 1), PrimitiveList::from([5, 3, 1]));
        assert_eq!(view.reject(|x| x % 2 == 1), PrimitiveList::from([4, 2]));
        assert_eq!(view.detect(|x| x < 4), Some(3));
        assert_eq!(view.max(), Some(5));
        assert_eq!(view.sum(), 15);
    }

    #[test]
    fn test_to_array() {
        let list = PrimitiveList::from([false, false, true]);
        assert_eq!(list.as_reversed().to_array(), vec![true, false, false]);
        assert_eq!(list.as_reversed().to_list(), PrimitiveList::from([true, false, false]));
    }

    #[test]
    fn test_at() {
        let list = PrimitiveList::from(['a', 'b', 'c']);
        let view = list.as_reversed();
        assert_eq!(view.at(0), 'c');
        assert_eq!(view.at(2), 'a');
        assert_eq!(view.get(3), None);
    }

    #[test]
    #[should_panic]
    fn test_at_out_of_bounds() {
        let list = PrimitiveList::from(['a']);
        list.as_reversed().at(1);
    }

    #[test]
    fn test_equals() {
        let lists = [
            PrimitiveList::from(vec![false, false, true]),
            PrimitiveList::from(vec![false, false, true]),
            PrimitiveList::from(vec![false, true]),
            PrimitiveList::from(vec![false, false]),
            PrimitiveList::from(vec![true]),
            PrimitiveList::from(vec![true, false, false]),
            PrimitiveList::from(vec![false, true, false]),
        ];
        let first = lists[0].as_reversed();
        let second = lists[1].as_reversed();
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
        for other in &lists[2..] {
            assert_ne!(first, other.as_reversed());
        }

        // A view equals and hashes like the materialized reverse
        let materialized = PrimitiveList::from([true, false, false]);
        assert_eq!(first, materialized);
        assert_eq!(materialized, first);
        assert_eq!(hash_of(&first), hash_of(&materialized));
    }

    #[test]
    fn test_double_reversal() {
        let list = PrimitiveList::from([3u64, 1, 2]);
        let view = list.as_reversed();
        let twice = view.as_reversed();
        assert_eq!(twice, list);
        assert_eq!(twice.to_array(), vec![3, 1, 2]);
        assert_eq!(hash_of(&twice), hash_of(&list));
    }

    #[test]
    fn test_to_string() {
        let list = PrimitiveList::from([false, false, true]);
        assert_eq!(list.as_reversed().to_string(), "[true, false, false]");
        assert_eq!(PrimitiveList::<bool>::new().as_reversed().to_string(), "[]");
        assert_eq!(format!("{:?}", list.as_reversed()), "[true, false, false]");
    }

    #[test]
    fn test_make_string() {
        let list = PrimitiveList::from([false, false, true]);
        let view = list.as_reversed();
        assert_eq!(view.make_string(), "true, false, false");
        assert_eq!(PrimitiveList::from([true]).as_reversed().make_string_sep("/"), "true");
        assert_eq!(view.make_string_sep("/"), "true/false/false");
        assert_eq!(view.make_string_with("[", ", ", "]"), view.to_string());
        assert_eq!(PrimitiveList::<bool>::new().as_reversed().make_string(), "");
    }

    #[test]
    fn test_append_string() -> fmt::Result {
        let list = PrimitiveList::from([false, false, true]);
        let view = list.as_reversed();

        for (separator, expected) in [
            (None, "true, false, false"),
            (Some("/"), "true/false/false"),
        ] {
            let mut out = String::new();
            match separator {
                Some(separator) => view.append_string_sep(&mut out, separator)?,
                None => view.append_string(&mut out)?,
            }
            assert_eq!(out, expected);
        }

        let mut out = String::new();
        PrimitiveList::<bool>::new().as_reversed().append_string(&mut out)?;
        assert_eq!(out, "");

        let mut out = String::new();
        view.append_string_with(&mut out, "[", ", ", "]")?;
        assert_eq!(out, view.to_string());
        Ok(())
    }

    #[test]
    fn test_engine_on_view() {
        let list: PrimitiveList<i32> = (1..=5).collect();
        let view = list.as_reversed();
        assert!(matches!(plan(&view), Plan::Indexed(_)));

        let split = iterate::partition(&view, |x| x % 2 == 0);
        assert_eq!(split.selected(), &PrimitiveList::from([4, 2]));
        assert_eq!(split.rejected(), &PrimitiveList::from([5, 3, 1]));
        assert_eq!(iterate::map(&view, |x| x * 10), vec![50, 40, 30, 20, 10]);

        let mut positions = Vec::new();
        iterate::for_each_with_index(&view, |x, index| positions.push((index, x)));
        assert_eq!(positions, vec![(0, 5), (1, 4), (2, 3), (3, 2), (4, 1)]);
    }

    #[test]
    fn test_view_does_not_touch_source() -> eyre::Result<()> {
        let list = PrimitiveList::from([1u8, 2, 3]);
        let view = list.as_reversed();
        assert_eq!(iterate::take(&view, 2)?, PrimitiveList::from([3u8, 2]));
        assert_eq!(iterate::drop(&view, 2)?, PrimitiveList::from([1u8]));
        assert_eq!(list, PrimitiveList::from([1u8, 2, 3]));
        assert!(std::ptr::eq(view.source(), &list));
        Ok(())
    }
}
