//! Unboxed containers of primitive values and their shared read contract.
//!
//! Every primitive container, including the non-materializing [`ReversedView`], exposes the
//! same query surface through [`PrimitiveIterable`]. Equality and hashing are defined on the
//! element sequence alone, so a list and a view over another list compare and hash as equal
//! whenever they yield the same values in the same order.

use std::fmt::{self, Write};
use std::hash::Hasher;

use ahash::AHashSet;
use kollekt_core_rs::num::{Numeric, Primitive};
use kollekt_core_rs::{render, Cursor};

pub use list::{ListCursor, PrimitiveList};
pub use reversed::{ReversedCursor, ReversedView};

mod list;
mod reversed;

/// Read-only query contract of a primitive container.
///
/// Predicates and transforms receive the values themselves; nothing is boxed or borrowed.
pub trait PrimitiveIterable {
    type Prim: Primitive;
    type PrimCursor<'a>: Cursor<Item = Self::Prim>
    where
        Self: 'a;

    fn prim_cursor(&self) -> Self::PrimCursor<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn contains(&self, value: Self::Prim) -> bool {
        self.any_satisfy(|item| item.same(value))
    }

    fn contains_all(&self, values: &[Self::Prim]) -> bool {
        values.iter().all(|value| self.contains(*value))
    }

    fn for_each(&self, action: impl FnMut(Self::Prim)) {
        self.prim_cursor().for_each(action)
    }

    fn select(&self, mut predicate: impl FnMut(Self::Prim) -> bool) -> PrimitiveList<Self::Prim> {
        self.prim_cursor().filter(|item| predicate(*item)).collect()
    }

    fn reject(&self, mut predicate: impl FnMut(Self::Prim) -> bool) -> PrimitiveList<Self::Prim> {
        self.prim_cursor().filter(|item| !predicate(*item)).collect()
    }

    fn detect(&self, mut predicate: impl FnMut(Self::Prim) -> bool) -> Option<Self::Prim> {
        self.prim_cursor().find(|item| predicate(*item))
    }

    fn detect_if_none(
        &self,
        predicate: impl FnMut(Self::Prim) -> bool,
        default: Self::Prim,
    ) -> Self::Prim {
        self.detect(predicate).unwrap_or(default)
    }

    fn count(&self, mut predicate: impl FnMut(Self::Prim) -> bool) -> usize {
        self.prim_cursor().filter(|item| predicate(*item)).count()
    }

    fn any_satisfy(&self, predicate: impl FnMut(Self::Prim) -> bool) -> bool {
        self.prim_cursor().any(predicate)
    }

    fn all_satisfy(&self, predicate: impl FnMut(Self::Prim) -> bool) -> bool {
        self.prim_cursor().all(predicate)
    }

    fn none_satisfy(&self, predicate: impl FnMut(Self::Prim) -> bool) -> bool {
        !self.any_satisfy(predicate)
    }

    fn any_satisfy_with<X>(
        &self,
        mut predicate: impl FnMut(Self::Prim, &X) -> bool,
        extra: X,
    ) -> bool {
        self.any_satisfy(|item| predicate(item, &extra))
    }

    fn all_satisfy_with<X>(
        &self,
        mut predicate: impl FnMut(Self::Prim, &X) -> bool,
        extra: X,
    ) -> bool {
        self.all_satisfy(|item| predicate(item, &extra))
    }

    fn none_satisfy_with<X>(
        &self,
        mut predicate: impl FnMut(Self::Prim, &X) -> bool,
        extra: X,
    ) -> bool {
        self.none_satisfy(|item| predicate(item, &extra))
    }

    /// Transforms every value into an object, preserving order.
    fn collect<R>(&self, transform: impl FnMut(Self::Prim) -> R) -> Vec<R> {
        self.prim_cursor().map(transform).collect()
    }

    fn to_array(&self) -> Vec<Self::Prim> {
        self.prim_cursor().collect()
    }

    fn to_list(&self) -> PrimitiveList<Self::Prim> {
        self.prim_cursor().collect()
    }

    /// Values with duplicates removed, keeping first occurrences. Duplicates are detected by bit
    /// pattern, so all `NaN`s with the same payload collapse into one and `-0.0` stays apart
    /// from `0.0`.
    fn distinct(&self) -> PrimitiveList<Self::Prim> {
        let mut seen = AHashSet::new();
        self.prim_cursor().filter(|item| seen.insert(item.bits())).collect()
    }

    /// Largest value. Among equal maxima the first one wins. Values that do not compare to
    /// themselves (`NaN`) are skipped; the first of them is returned only if nothing else is
    /// present.
    fn max(&self) -> Option<Self::Prim> {
        extreme(self.prim_cursor(), |item, best| item > best)
    }

    fn min(&self) -> Option<Self::Prim> {
        extreme(self.prim_cursor(), |item, best| item < best)
    }

    fn sum(&self) -> <Self::Prim as Numeric>::Sum
    where
        Self::Prim: Numeric,
    {
        self.prim_cursor()
            .fold(::num::Zero::zero(), |acc, item| acc + item.widen())
    }

    /// Arithmetic mean, `None` for an empty container.
    fn average(&self) -> Option<f64>
    where
        Self::Prim: Numeric,
    {
        if self.is_empty() {
            return None;
        }
        ::num::ToPrimitive::to_f64(&self.sum()).map(|sum| sum / self.len() as f64)
    }

    /// Values joined by `", "`, without brackets.
    fn make_string(&self) -> String {
        self.make_string_with("", render::DEFAULT_SEPARATOR, "")
    }

    fn make_string_sep(&self, separator: &str) -> String {
        self.make_string_with("", separator, "")
    }

    fn make_string_with(&self, start: &str, separator: &str, end: &str) -> String {
        render::make_string(self.prim_cursor(), start, separator, end)
    }

    fn append_string<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        self.append_string_with(out, "", render::DEFAULT_SEPARATOR, "")
    }

    fn append_string_sep<W: Write + ?Sized>(&self, out: &mut W, separator: &str) -> fmt::Result {
        self.append_string_with(out, "", separator, "")
    }

    fn append_string_with<W: Write + ?Sized>(
        &self,
        out: &mut W,
        start: &str,
        separator: &str,
        end: &str,
    ) -> fmt::Result {
        render::append_string(out, self.prim_cursor(), start, separator, end)
    }
}

/// Primitive containers with O(1) positional reads.
pub trait PrimitiveIndexed: PrimitiveIterable {
    /// Value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at(&self, index: usize) -> Self::Prim;

    fn get(&self, index: usize) -> Option<Self::Prim> {
        (index < self.len()).then(|| self.at(index))
    }

    /// Reversed view over this container. Nothing is copied.
    fn as_reversed(&self) -> ReversedView<'_, Self> {
        ReversedView::new(self)
    }
}

/// Same length and pairwise identical values, in traversal order.
pub fn sequence_eq<L, R>(left: &L, right: &R) -> bool
where
    L: PrimitiveIterable + ?Sized,
    R: PrimitiveIterable<Prim = L::Prim> + ?Sized,
{
    left.len() == right.len()
        && left
            .prim_cursor()
            .zip(right.prim_cursor())
            .all(|(l, r)| l.same(r))
}

/// Order-sensitive hash of the value sequence.
pub fn sequence_hash<L, H>(items: &L, state: &mut H)
where
    L: PrimitiveIterable + ?Sized,
    H: Hasher,
{
    state.write_usize(items.len());
    for item in items.prim_cursor() {
        item.hash_into(state);
    }
}

fn extreme<P: Primitive>(
    mut cursor: impl Iterator<Item = P>,
    mut wins: impl FnMut(P, P) -> bool,
) -> Option<P> {
    let comparable = |value: &P| value.partial_cmp(value).is_some();
    let first = cursor.next()?;
    Some(cursor.fold(first, |best, item| {
        if (!comparable(&best) && comparable(&item)) || wins(item, best) {
            item
        } else {
            best
        }
    }))
}

fn render_bracketed<L>(items: &L, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    L: PrimitiveIterable + ?Sized,
{
    items.append_string_with(f, render::OPEN, render::DEFAULT_SEPARATOR, render::CLOSE)
}
