//! Higher-order operations over any [`Container`].
//!
//! Aggregate operations ask [`plan`] for a traversal strategy: small indexed containers are
//! walked slot by slot, everything else goes through the container cursor. Positional
//! operations (`take`, `drop`, bounded `for_each`) read slots directly whenever the container
//! is indexed, regardless of its size. Both bodies produce identical results.

use std::cmp::Ordering;
use std::fmt::{self, Display, Write};
use std::hash::Hash;
use std::ops::Range;

use ahash::AHashSet;
use eyre::{ensure, Result};
use kollekt_core_rs::{plan, render, Access, Container, IterateError, Plan};

pub use compact::{remove_if, remove_if_with};
pub use partition::Partition;

mod compact;
mod indexed;
mod partition;
mod sequential;

/// Left-to-right accumulation. Returns `seed` untouched for an empty container.
pub fn fold<'a, C, A>(seed: A, container: &'a C, combine: impl FnMut(A, C::Item<'a>) -> A) -> A
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::fold(indexer, seed, combine),
        Plan::Cursor(cursor) => sequential::fold(cursor, seed, combine),
    }
}

pub fn fold_with<'a, C, A, X>(
    seed: A,
    container: &'a C,
    mut combine: impl FnMut(A, C::Item<'a>, &X) -> A,
    extra: X,
) -> A
where
    C: Container + ?Sized,
{
    fold(seed, container, |acc, item| combine(acc, item, &extra))
}

pub fn for_each<'a, C>(container: &'a C, mut action: impl FnMut(C::Item<'a>))
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => {
            indexed::for_each_with_index_in(indexer, 0..indexer.len(), |item, _| action(item))
        }
        Plan::Cursor(cursor) => cursor.for_each(action),
    }
}

pub fn for_each_with<'a, C, X>(
    container: &'a C,
    mut action: impl FnMut(C::Item<'a>, &X),
    extra: X,
) where
    C: Container + ?Sized,
{
    for_each(container, |item| action(item, &extra))
}

/// Calls `action` with every element and its position in the container order.
pub fn for_each_with_index<'a, C>(container: &'a C, action: impl FnMut(C::Item<'a>, usize))
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => {
            indexed::for_each_with_index_in(indexer, 0..indexer.len(), action)
        }
        Plan::Cursor(cursor) => sequential::for_each_with_index_in(cursor, 0..usize::MAX, action),
    }
}

/// Visits the elements at positions `from..=to`.
///
/// Both bounds must lie in `[0, size)` and `from` must not exceed `to + 1`, otherwise
/// [`IterateError::OutOfBounds`] is reported before anything is visited. A reversed range is
/// never iterated backwards.
pub fn for_each_in_range<'a, C>(
    container: &'a C,
    from: isize,
    to: isize,
    mut action: impl FnMut(C::Item<'a>),
) -> Result<()>
where
    C: Container + ?Sized,
{
    for_each_with_index_in_range(container, from, to, |item, _| action(item))
}

pub fn for_each_with_index_in_range<'a, C>(
    container: &'a C,
    from: isize,
    to: isize,
    action: impl FnMut(C::Item<'a>, usize),
) -> Result<()>
where
    C: Container + ?Sized,
{
    let range = checked_range(from, to, container.size())?;
    match container.access() {
        Access::Indexed(indexer) => indexed::for_each_with_index_in(indexer, range, action),
        Access::Sequential(sequential) => {
            sequential::for_each_with_index_in(sequential.cursor(), range, action)
        }
    }
    Ok(())
}

/// Transforms every element, preserving order and size.
pub fn map<'a, C, R>(container: &'a C, transform: impl FnMut(C::Item<'a>) -> R) -> Vec<R>
where
    C: Container + ?Sized,
{
    let mut target = Vec::new();
    map_into(container, transform, &mut target);
    target
}

pub fn map_into<'a, 't, C, R, T>(
    container: &'a C,
    transform: impl FnMut(C::Item<'a>) -> R,
    target: &'t mut T,
) -> &'t mut T
where
    C: Container + ?Sized,
    T: Extend<R>,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::map_into(indexer, transform, target),
        Plan::Cursor(cursor) => sequential::map_into(cursor, transform, target),
    }
    target
}

pub fn collect_with<'a, C, R, X>(
    container: &'a C,
    mut transform: impl FnMut(C::Item<'a>, &X) -> R,
    extra: X,
) -> Vec<R>
where
    C: Container + ?Sized,
{
    map(container, |item| transform(item, &extra))
}

/// Transforms the elements that satisfy `predicate`.
pub fn collect_if<'a, C, R>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
    transform: impl FnMut(C::Item<'a>) -> R,
) -> Vec<R>
where
    C: Container + ?Sized,
{
    let mut target = Vec::new();
    collect_if_into(container, predicate, transform, &mut target);
    target
}

pub fn collect_if_into<'a, 't, C, R, T>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
    transform: impl FnMut(C::Item<'a>) -> R,
    target: &'t mut T,
) -> &'t mut T
where
    C: Container + ?Sized,
    T: Extend<R>,
{
    match plan(container) {
        Plan::Indexed(indexer) => {
            indexed::collect_if_into(indexer, predicate, transform, target)
        }
        Plan::Cursor(cursor) => sequential::collect_if_into(cursor, predicate, transform, target),
    }
    target
}

/// First element satisfying `predicate` in container order.
pub fn detect<'a, C>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> Option<C::Item<'a>>
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::detect(indexer, predicate),
        Plan::Cursor(cursor) => sequential::detect(cursor, predicate),
    }
}

pub fn detect_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> Option<C::Item<'a>>
where
    C: Container + ?Sized,
{
    detect(container, |item| predicate(item, &extra))
}

pub fn detect_if_none<'a, C>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
    default: C::Item<'a>,
) -> C::Item<'a>
where
    C: Container + ?Sized,
{
    detect(container, predicate).unwrap_or(default)
}

pub fn detect_with_if_none<'a, C, X>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
    default: C::Item<'a>,
) -> C::Item<'a>
where
    C: Container + ?Sized,
{
    detect_with(container, predicate, extra).unwrap_or(default)
}

/// Position of the first element satisfying `predicate`, `None` if there is no such element.
pub fn detect_index<'a, C>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> Option<usize>
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::detect_index(indexer, predicate),
        Plan::Cursor(cursor) => sequential::detect_index(cursor, predicate),
    }
}

pub fn detect_index_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> Option<usize>
where
    C: Container + ?Sized,
{
    detect_index(container, |item| predicate(item, &extra))
}

pub fn any_satisfy<'a, C>(container: &'a C, predicate: impl FnMut(&C::Item<'a>) -> bool) -> bool
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::any_satisfy(indexer, predicate),
        Plan::Cursor(cursor) => sequential::any_satisfy(cursor, predicate),
    }
}

pub fn all_satisfy<'a, C>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> bool
where
    C: Container + ?Sized,
{
    !any_satisfy(container, |item| !predicate(item))
}

pub fn none_satisfy<'a, C>(container: &'a C, predicate: impl FnMut(&C::Item<'a>) -> bool) -> bool
where
    C: Container + ?Sized,
{
    !any_satisfy(container, predicate)
}

pub fn any_satisfy_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> bool
where
    C: Container + ?Sized,
{
    any_satisfy(container, |item| predicate(item, &extra))
}

pub fn all_satisfy_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> bool
where
    C: Container + ?Sized,
{
    all_satisfy(container, |item| predicate(item, &extra))
}

pub fn none_satisfy_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> bool
where
    C: Container + ?Sized,
{
    none_satisfy(container, |item| predicate(item, &extra))
}

/// Number of elements satisfying `predicate`. Always traverses the whole container.
pub fn count<'a, C>(container: &'a C, predicate: impl FnMut(&C::Item<'a>) -> bool) -> usize
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::count(indexer, predicate),
        Plan::Cursor(cursor) => sequential::count(cursor, predicate),
    }
}

pub fn count_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> usize
where
    C: Container + ?Sized,
{
    count(container, |item| predicate(item, &extra))
}

fn filter_into<'a, C, T>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
    keep: bool,
    target: &mut T,
) where
    C: Container + ?Sized,
    T: Extend<C::Elem>,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::filter_into(indexer, predicate, keep, target),
        Plan::Cursor(cursor) => {
            sequential::filter_into(cursor, predicate, keep, |item| C::adopt(item), target)
        }
    }
}

/// Elements satisfying `predicate`, in a new container of the same family.
pub fn select<'a, C>(container: &'a C, predicate: impl FnMut(&C::Item<'a>) -> bool) -> C::Family
where
    C: Container + ?Sized,
{
    let mut target = C::Family::default();
    filter_into(container, predicate, true, &mut target);
    target
}

pub fn select_into<'a, 't, C, T>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
    target: &'t mut T,
) -> &'t mut T
where
    C: Container + ?Sized,
    T: Extend<C::Elem>,
{
    filter_into(container, predicate, true, target);
    target
}

pub fn select_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> C::Family
where
    C: Container + ?Sized,
{
    select(container, |item| predicate(item, &extra))
}

/// Elements that do not satisfy `predicate`, in a new container of the same family.
pub fn reject<'a, C>(container: &'a C, predicate: impl FnMut(&C::Item<'a>) -> bool) -> C::Family
where
    C: Container + ?Sized,
{
    let mut target = C::Family::default();
    filter_into(container, predicate, false, &mut target);
    target
}

pub fn reject_into<'a, 't, C, T>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
    target: &'t mut T,
) -> &'t mut T
where
    C: Container + ?Sized,
    T: Extend<C::Elem>,
{
    filter_into(container, predicate, false, target);
    target
}

pub fn reject_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> C::Family
where
    C: Container + ?Sized,
{
    reject(container, |item| predicate(item, &extra))
}

/// Splits the container in a single pass. Every element lands in exactly one side.
pub fn partition<'a, C>(
    container: &'a C,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> Partition<C::Family>
where
    C: Container + ?Sized,
{
    let mut selected = C::Family::default();
    let mut rejected = C::Family::default();
    match plan(container) {
        Plan::Indexed(indexer) => {
            indexed::partition_into(indexer, predicate, &mut selected, &mut rejected)
        }
        Plan::Cursor(cursor) => sequential::partition_into(
            cursor,
            predicate,
            |item| C::adopt(item),
            &mut selected,
            &mut rejected,
        ),
    }
    Partition::new(selected, rejected)
}

pub fn partition_with<'a, C, X>(
    container: &'a C,
    mut predicate: impl FnMut(&C::Item<'a>, &X) -> bool,
    extra: X,
) -> Partition<C::Family>
where
    C: Container + ?Sized,
{
    partition(container, |item| predicate(item, &extra))
}

/// First `min(count, size)` elements in a new container. Negative counts are rejected with
/// [`IterateError::InvalidArgument`].
pub fn take<C>(container: &C, count: isize) -> Result<C::Family>
where
    C: Container + ?Sized,
{
    let count = checked_count(count)?;
    let mut target = C::Family::default();
    match container.access() {
        Access::Indexed(indexer) => {
            indexed::slice_into(indexer, 0..count.min(indexer.len()), &mut target)
        }
        Access::Sequential(sequential) => sequential::slice_into(
            sequential.cursor(),
            0..count,
            |item| C::adopt(item),
            &mut target,
        ),
    }
    Ok(target)
}

/// Everything after the first `min(count, size)` elements in a new container. Negative counts
/// are rejected with [`IterateError::InvalidArgument`].
pub fn drop<C>(container: &C, count: isize) -> Result<C::Family>
where
    C: Container + ?Sized,
{
    let count = checked_count(count)?;
    let mut target = C::Family::default();
    match container.access() {
        Access::Indexed(indexer) => {
            let len = indexer.len();
            indexed::slice_into(indexer, count.min(len)..len, &mut target)
        }
        Access::Sequential(sequential) => sequential::slice_into(
            sequential.cursor(),
            count..usize::MAX,
            |item| C::adopt(item),
            &mut target,
        ),
    }
    Ok(target)
}

/// Copies every element into `target`, skipping values that were already seen. The first
/// occurrence wins.
pub fn distinct<'a, 't, C, T>(container: &'a C, target: &'t mut T) -> &'t mut T
where
    C: Container + ?Sized,
    C::Item<'a>: Hash + Eq + Copy,
    T: Extend<C::Elem>,
{
    distinct_by_key(container, |item| *item, target)
}

/// Same as [`distinct`], with two elements considered duplicates when `key` maps them to equal
/// values. Containers of floats key on [`Primitive::bits`](kollekt_core_rs::num::Primitive::bits).
pub fn distinct_by_key<'a, 't, C, T, K>(
    container: &'a C,
    mut key: impl FnMut(&C::Item<'a>) -> K,
    target: &'t mut T,
) -> &'t mut T
where
    C: Container + ?Sized,
    K: Hash + Eq,
    T: Extend<C::Elem>,
{
    let mut seen = AHashSet::new();
    for_each(container, |item| {
        if seen.insert(key(&item)) {
            target.extend(Some(C::adopt(item)));
        }
    });
    target
}

/// Largest element by natural order. Among equal maxima the first one is returned.
pub fn max<'a, C>(container: &'a C) -> Option<C::Item<'a>>
where
    C: Container + ?Sized,
    C::Item<'a>: Ord,
{
    max_by(container, |left, right| left.cmp(right))
}

pub fn min<'a, C>(container: &'a C) -> Option<C::Item<'a>>
where
    C: Container + ?Sized,
    C::Item<'a>: Ord,
{
    min_by(container, |left, right| left.cmp(right))
}

pub fn max_by<'a, C>(
    container: &'a C,
    compare: impl FnMut(&C::Item<'a>, &C::Item<'a>) -> Ordering,
) -> Option<C::Item<'a>>
where
    C: Container + ?Sized,
{
    extreme_by(container, compare, Ordering::Greater)
}

pub fn min_by<'a, C>(
    container: &'a C,
    compare: impl FnMut(&C::Item<'a>, &C::Item<'a>) -> Ordering,
) -> Option<C::Item<'a>>
where
    C: Container + ?Sized,
{
    extreme_by(container, compare, Ordering::Less)
}

fn extreme_by<'a, C>(
    container: &'a C,
    compare: impl FnMut(&C::Item<'a>, &C::Item<'a>) -> Ordering,
    wanted: Ordering,
) -> Option<C::Item<'a>>
where
    C: Container + ?Sized,
{
    match plan(container) {
        Plan::Indexed(indexer) => indexed::extreme_by(indexer, compare, wanted),
        Plan::Cursor(cursor) => sequential::extreme_by(cursor, compare, wanted),
    }
}

pub fn make_string<'a, C>(container: &'a C, start: &str, separator: &str, end: &str) -> String
where
    C: Container + ?Sized,
    C::Item<'a>: Display,
{
    render::make_string(container.cursor(), start, separator, end)
}

pub fn append_string<'a, C, W>(
    container: &'a C,
    out: &mut W,
    start: &str,
    separator: &str,
    end: &str,
) -> fmt::Result
where
    C: Container + ?Sized,
    C::Item<'a>: Display,
    W: Write + ?Sized,
{
    render::append_string(out, container.cursor(), start, separator, end)
}

fn checked_count(count: isize) -> Result<usize> {
    ensure!(count >= 0, IterateError::negative_count(count));
    Ok(count as usize)
}

fn checked_range(from: isize, to: isize, size: usize) -> Result<Range<usize>> {
    let within = |index: isize| index >= 0 && (index as usize) < size;
    ensure!(
        within(from) && within(to) && from <= to + 1,
        IterateError::OutOfBounds { from, to, size }
    );
    Ok(from as usize..to as usize + 1)
}
