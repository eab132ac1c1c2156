//! Algorithm bodies for containers with O(1) positional reads. Every body walks slot indices
//! directly and never creates a cursor.

use std::cmp::Ordering;
use std::ops::Range;

use kollekt_core_rs::{Container, Indexer};

pub fn fold<'a, C, A>(
    indexer: Indexer<'a, C>,
    seed: A,
    mut combine: impl FnMut(A, C::Item<'a>) -> A,
) -> A
where
    C: Container + ?Sized + 'a,
{
    let mut acc = seed;
    for index in 0..indexer.len() {
        acc = combine(acc, indexer.at(index));
    }
    acc
}

pub fn for_each_with_index_in<'a, C>(
    indexer: Indexer<'a, C>,
    range: Range<usize>,
    mut action: impl FnMut(C::Item<'a>, usize),
) where
    C: Container + ?Sized + 'a,
{
    debug_assert!(range.end <= indexer.len());
    for index in range {
        action(indexer.at(index), index);
    }
}

pub fn map_into<'a, C, R, T>(
    indexer: Indexer<'a, C>,
    mut transform: impl FnMut(C::Item<'a>) -> R,
    target: &mut T,
) where
    C: Container + ?Sized + 'a,
    T: Extend<R>,
{
    target.extend((0..indexer.len()).map(|index| transform(indexer.at(index))));
}

pub fn collect_if_into<'a, C, R, T>(
    indexer: Indexer<'a, C>,
    mut predicate: impl FnMut(&C::Item<'a>) -> bool,
    mut transform: impl FnMut(C::Item<'a>) -> R,
    target: &mut T,
) where
    C: Container + ?Sized + 'a,
    T: Extend<R>,
{
    for index in 0..indexer.len() {
        let item = indexer.at(index);
        if predicate(&item) {
            target.extend(Some(transform(item)));
        }
    }
}

pub fn detect<'a, C>(
    indexer: Indexer<'a, C>,
    mut predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> Option<C::Item<'a>>
where
    C: Container + ?Sized + 'a,
{
    for index in 0..indexer.len() {
        let item = indexer.at(index);
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

pub fn detect_index<'a, C>(
    indexer: Indexer<'a, C>,
    mut predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> Option<usize>
where
    C: Container + ?Sized + 'a,
{
    (0..indexer.len()).find(|&index| predicate(&indexer.at(index)))
}

pub fn any_satisfy<'a, C>(
    indexer: Indexer<'a, C>,
    predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> bool
where
    C: Container + ?Sized + 'a,
{
    detect_index(indexer, predicate).is_some()
}

pub fn count<'a, C>(
    indexer: Indexer<'a, C>,
    mut predicate: impl FnMut(&C::Item<'a>) -> bool,
) -> usize
where
    C: Container + ?Sized + 'a,
{
    let mut matches = 0;
    for index in 0..indexer.len() {
        if predicate(&indexer.at(index)) {
            matches += 1;
        }
    }
    matches
}

pub fn filter_into<'a, C, T>(
    indexer: Indexer<'a, C>,
    mut predicate: impl FnMut(&C::Item<'a>) -> bool,
    keep: bool,
    target: &mut T,
) where
    C: Container + ?Sized + 'a,
    T: Extend<C::Elem>,
{
    for index in 0..indexer.len() {
        let item = indexer.at(index);
        if predicate(&item) == keep {
            target.extend(Some(C::adopt(item)));
        }
    }
}

pub fn partition_into<'a, C>(
    indexer: Indexer<'a, C>,
    mut predicate: impl FnMut(&C::Item<'a>) -> bool,
    selected: &mut C::Family,
    rejected: &mut C::Family,
) where
    C: Container + ?Sized + 'a,
{
    for index in 0..indexer.len() {
        let item = indexer.at(index);
        let side = if predicate(&item) {
            &mut *selected
        } else {
            &mut *rejected
        };
        side.extend(Some(C::adopt(item)));
    }
}

pub fn slice_into<'a, C, T>(indexer: Indexer<'a, C>, range: Range<usize>, target: &mut T)
where
    C: Container + ?Sized + 'a,
    T: Extend<C::Elem>,
{
    debug_assert!(range.end <= indexer.len());
    target.extend(range.map(|index| C::adopt(indexer.at(index))));
}

/// First element that compares as `wanted` against every element kept so far.
pub fn extreme_by<'a, C>(
    indexer: Indexer<'a, C>,
    mut compare: impl FnMut(&C::Item<'a>, &C::Item<'a>) -> Ordering,
    wanted: Ordering,
) -> Option<C::Item<'a>>
where
    C: Container + ?Sized + 'a,
{
    if indexer.is_empty() {
        return None;
    }

    let mut best = indexer.at(0);
    for index in 1..indexer.len() {
        let item = indexer.at(index);
        if compare(&item, &best) == wanted {
            best = item;
        }
    }
    Some(best)
}
