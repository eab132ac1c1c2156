use std::collections::{LinkedList, VecDeque};

use itertools::Itertools;
use kollekt_core_rs::{Compact, Edit};

/// Removes every element matching `predicate` in place and returns how many were removed.
/// Kept elements preserve their relative order.
pub fn remove_if<C, P>(container: &mut C, mut predicate: P) -> usize
where
    C: Compact + ?Sized,
    P: FnMut(&C::Elem) -> bool,
{
    let mut edit = container.edit();
    let before = edit.len();
    let removed = match &mut edit {
        Edit::Contiguous(vec) => compact(&mut **vec, &mut predicate),
        Edit::Ring(deque) => compact(&mut **deque, &mut predicate),
        Edit::Linked(list) => relink(&mut **list, &mut predicate),
    };

    if removed > 0 {
        log::debug!(
            "Removed {removed} of {before} elements ({:?} storage)",
            edit.capability()
        );
    }
    removed
}

pub fn remove_if_with<C, X>(
    container: &mut C,
    mut predicate: impl FnMut(&C::Elem, &X) -> bool,
    extra: X,
) -> usize
where
    C: Compact + ?Sized,
{
    remove_if(container, |elem| predicate(elem, &extra))
}

/// Indexed storage that can be compacted without reallocating.
trait Slots {
    type Elem;

    fn count(&self) -> usize;
    fn slot(&self, index: usize) -> &Self::Elem;
    fn exchange(&mut self, first: usize, second: usize);
    fn shrink(&mut self, len: usize);
}

impl<T> Slots for Vec<T> {
    type Elem = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> &T {
        &self[index]
    }

    fn exchange(&mut self, first: usize, second: usize) {
        self.swap(first, second)
    }

    fn shrink(&mut self, len: usize) {
        self.truncate(len)
    }
}

impl<T> Slots for VecDeque<T> {
    type Elem = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> &T {
        &self[index]
    }

    fn exchange(&mut self, first: usize, second: usize) {
        self.swap(first, second)
    }

    fn shrink(&mut self, len: usize) {
        self.truncate(len)
    }
}

// Kept elements are swapped forward to the write cursor, removed ones drift to the tail and
// are truncated in one go.
fn compact<S: Slots>(slots: &mut S, predicate: &mut impl FnMut(&S::Elem) -> bool) -> usize {
    let len = slots.count();
    let mut kept = 0;
    for cursor in 0..len {
        if !predicate(slots.slot(cursor)) {
            if kept != cursor {
                slots.exchange(kept, cursor);
            }
            kept += 1;
        }
    }
    slots.shrink(kept);
    len - kept
}

// Runs of kept nodes are split off and appended back, removed runs are dropped with the
// detached tail they were split from. Kept nodes are never reallocated.
fn relink<T>(list: &mut LinkedList<T>, predicate: &mut impl FnMut(&T) -> bool) -> usize {
    let runs = list.iter().map(|item| predicate(item)).dedup_with_count().collect_vec();
    let mut rest = std::mem::take(list);
    let mut removed = 0;
    for (len, matched) in runs {
        let tail = rest.split_off(len);
        if matched {
            removed += len;
        } else {
            list.append(&mut rest);
        }
        rest = tail;
    }
    removed
}
