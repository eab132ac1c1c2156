//! Algorithm bodies driven by a forward cursor. They are valid for every container and serve
//! as the general path for indexed containers above the fast path threshold.

use std::cmp::Ordering;
use std::ops::Range;

pub fn fold<E, A>(
    cursor: impl Iterator<Item = E>,
    seed: A,
    mut combine: impl FnMut(A, E) -> A,
) -> A {
    let mut acc = seed;
    for item in cursor {
        acc = combine(acc, item);
    }
    acc
}

pub fn for_each_with_index_in<E>(
    cursor: impl Iterator<Item = E>,
    range: Range<usize>,
    mut action: impl FnMut(E, usize),
) {
    let length = range.len();
    for (index, item) in cursor.enumerate().skip(range.start).take(length) {
        action(item, index);
    }
}

pub fn map_into<E, R, T: Extend<R>>(
    cursor: impl Iterator<Item = E>,
    transform: impl FnMut(E) -> R,
    target: &mut T,
) {
    target.extend(cursor.map(transform));
}

pub fn collect_if_into<E, R, T: Extend<R>>(
    cursor: impl Iterator<Item = E>,
    mut predicate: impl FnMut(&E) -> bool,
    transform: impl FnMut(E) -> R,
    target: &mut T,
) {
    target.extend(cursor.filter(|item| predicate(item)).map(transform));
}

pub fn detect<E>(
    cursor: impl Iterator<Item = E>,
    mut predicate: impl FnMut(&E) -> bool,
) -> Option<E> {
    for item in cursor {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

pub fn detect_index<E>(
    cursor: impl Iterator<Item = E>,
    mut predicate: impl FnMut(&E) -> bool,
) -> Option<usize> {
    for (index, item) in cursor.enumerate() {
        if predicate(&item) {
            return Some(index);
        }
    }
    None
}

pub fn any_satisfy<E>(cursor: impl Iterator<Item = E>, predicate: impl FnMut(&E) -> bool) -> bool {
    detect(cursor, predicate).is_some()
}

pub fn count<E>(cursor: impl Iterator<Item = E>, mut predicate: impl FnMut(&E) -> bool) -> usize {
    let mut matches = 0;
    for item in cursor {
        if predicate(&item) {
            matches += 1;
        }
    }
    matches
}

pub fn filter_into<E, O, T: Extend<O>>(
    cursor: impl Iterator<Item = E>,
    mut predicate: impl FnMut(&E) -> bool,
    keep: bool,
    adopt: impl FnMut(E) -> O,
    target: &mut T,
) {
    target.extend(cursor.filter(|item| predicate(item) == keep).map(adopt));
}

pub fn partition_into<E, O, T: Extend<O>>(
    cursor: impl Iterator<Item = E>,
    mut predicate: impl FnMut(&E) -> bool,
    mut adopt: impl FnMut(E) -> O,
    selected: &mut T,
    rejected: &mut T,
) {
    for item in cursor {
        let side = if predicate(&item) {
            &mut *selected
        } else {
            &mut *rejected
        };
        side.extend(Some(adopt(item)));
    }
}

pub fn slice_into<E, O, T: Extend<O>>(
    cursor: impl Iterator<Item = E>,
    range: Range<usize>,
    adopt: impl FnMut(E) -> O,
    target: &mut T,
) {
    let length = range.len();
    target.extend(cursor.skip(range.start).take(length).map(adopt));
}

/// First element that compares as `wanted` against every element kept so far.
pub fn extreme_by<E>(
    mut cursor: impl Iterator<Item = E>,
    mut compare: impl FnMut(&E, &E) -> Ordering,
    wanted: Ordering,
) -> Option<E> {
    let mut best = cursor.next()?;
    for item in cursor {
        if compare(&item, &best) == wanted {
            best = item;
        }
    }
    Some(best)
}
