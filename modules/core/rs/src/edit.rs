use std::collections::{LinkedList, VecDeque};

use impl_tools::autoimpl;

use crate::capability::Capability;

/// Containers whose elements can be removed in place.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box<T>)]
pub trait Compact {
    type Elem;

    fn edit(&mut self) -> Edit<'_, Self::Elem>;
}

/// Mutable storage shapes understood by in-place algorithms.
pub enum Edit<'a, T> {
    /// Contiguous storage, compacted by swapping kept elements forward.
    Contiguous(&'a mut Vec<T>),
    /// Ring buffer, compacted the same way as contiguous storage.
    Ring(&'a mut VecDeque<T>),
    /// Linked nodes; runs of kept nodes are spliced back together without reallocation.
    Linked(&'a mut LinkedList<T>),
}

impl<T> Edit<'_, T> {
    pub fn capability(&self) -> Capability {
        match self {
            Edit::Contiguous(_) | Edit::Ring(_) => Capability::Indexed,
            Edit::Linked(_) => Capability::SequentialOnly,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Edit::Contiguous(vec) => vec.len(),
            Edit::Ring(deque) => deque.len(),
            Edit::Linked(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Compact for Vec<T> {
    type Elem = T;

    fn edit(&mut self) -> Edit<'_, Self::Elem> {
        Edit::Contiguous(self)
    }
}

impl<T> Compact for VecDeque<T> {
    type Elem = T;

    fn edit(&mut self) -> Edit<'_, Self::Elem> {
        Edit::Ring(self)
    }
}

impl<T> Compact for LinkedList<T> {
    type Elem = T;

    fn edit(&mut self) -> Edit<'_, Self::Elem> {
        Edit::Linked(self)
    }
}
